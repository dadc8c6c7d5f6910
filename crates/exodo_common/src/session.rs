//! Session context.
//!
//! Who is acting and with which operator profile. Passed explicitly to
//! callers instead of living in a process-wide store.

use exodo_shared::{OperatorSnapshot, Role};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated account id
    pub user_id: Option<String>,
    /// Operator profile of the account, if it has one
    pub operator: Option<OperatorSnapshot>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn login(user_id: impl Into<String>, operator: Option<OperatorSnapshot>) -> Self {
        let user_id = user_id.into();
        debug!(
            "Session opened for {} (operator profile: {})",
            user_id,
            operator.is_some()
        );
        Self {
            user_id: Some(user_id),
            operator,
        }
    }

    /// Replace the cached profile with a fresh read. Ignored when anonymous.
    pub fn refresh(&mut self, operator: OperatorSnapshot) {
        if self.user_id.is_some() {
            self.operator = Some(operator);
        }
    }

    pub fn logout(&mut self) {
        if let Some(user_id) = self.user_id.take() {
            debug!("Session closed for {}", user_id);
        }
        self.operator = None;
    }

    fn role(&self) -> Option<Role> {
        self.operator.as_ref().map(|op| op.role)
    }

    fn role_in(&self, roles: &[Role]) -> bool {
        self.role().map(|r| roles.contains(&r)).unwrap_or(false)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Setup is done once staff promotes the account past recruit
    pub fn has_completed_setup(&self) -> bool {
        matches!(self.role(), Some(r) if r != Role::Recruit)
    }

    pub fn is_active_operator(&self) -> bool {
        self.operator.as_ref().map(|op| op.status).unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.role_in(&[Role::Admin])
    }

    pub fn is_armorer(&self) -> bool {
        self.role_in(&[Role::Armorer])
    }

    pub fn is_event_management(&self) -> bool {
        self.role_in(&[Role::Admin, Role::Event, Role::Media, Role::Administrative])
    }

    pub fn is_administrative_management(&self) -> bool {
        self.role_in(&[Role::Administrative])
    }

    pub fn is_financial_management(&self) -> bool {
        self.role_in(&[Role::Financial])
    }

    /// Any staff role
    pub fn is_manager(&self) -> bool {
        matches!(self.role(), Some(r) if r != Role::Recruit && r != Role::Operator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_role(role: Role) -> Session {
        let mut op = OperatorSnapshot::new("op-1", "Ghost");
        op.role = role;
        Session::login("op-1", Some(op))
    }

    #[test]
    fn test_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(!session.has_completed_setup());
        assert!(!session.is_manager());
        assert!(!session.is_active_operator());
    }

    #[test]
    fn test_recruit_has_not_completed_setup() {
        let session = with_role(Role::Recruit);
        assert!(session.is_authenticated());
        assert!(!session.has_completed_setup());
        assert!(!session.is_manager());
    }

    #[test]
    fn test_staff_roles() {
        assert!(with_role(Role::Media).is_event_management());
        assert!(!with_role(Role::Media).is_admin());
        assert!(with_role(Role::Financial).is_financial_management());
        assert!(with_role(Role::Financial).is_manager());
        assert!(with_role(Role::Armorer).is_armorer());
        assert!(!with_role(Role::Operator).is_manager());
        assert!(with_role(Role::Operator).has_completed_setup());
    }

    #[test]
    fn test_refresh_and_logout() {
        let mut session = with_role(Role::Operator);
        let mut fresh = OperatorSnapshot::new("op-1", "Ghost");
        fresh.status = true;
        session.refresh(fresh);
        assert!(session.is_active_operator());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.operator.is_none());

        session.refresh(OperatorSnapshot::new("op-1", "Ghost"));
        assert!(session.operator.is_none());
    }
}
