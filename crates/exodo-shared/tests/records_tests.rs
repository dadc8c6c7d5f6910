//! Tests for decoding document-store rows.

use exodo_shared::*;

#[test]
fn test_operator_row_with_embedded_records() {
    let json = r#"{
        "id": "op-7",
        "codename": "Viper",
        "name": "Ana Lima",
        "role": "armorer",
        "status": true,
        "rating": 4,
        "level": 12,
        "xp": 11250,
        "prestige": 0,
        "category": 3,
        "badges": ["rank_recruta", "rank_soldado"],
        "availability": "both",
        "birth_date": "1994-11-02",
        "arsenal": [
            {"id": "w1", "name": "VSR-10", "type": 2, "category": 3, "fps": 450,
             "maintenance_at": "2026-01-10T12:00:00Z", "is_secondary": false},
            {"id": "w2", "name": "Glock", "type": 3, "is_secondary": true}
        ],
        "loadout": [
            {"id": "l1", "type_uniform": 3, "combat_shirt": true, "helmet": null}
        ]
    }"#;

    let op: OperatorSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(op.role, Role::Armorer);
    assert_eq!(op.category, Some(WeaponCategory::Sniper));
    assert_eq!(op.availability, Some(Availability::Both));
    assert_eq!(op.badges.len(), 2);
    assert_eq!(op.arsenal.len(), 2);
    assert!(op.arsenal[0].maintained_at.is_some());
    assert_eq!(op.arsenal[0].fps, Some(450));
    assert!(op.arsenal[1].is_secondary);
    assert_eq!(op.loadout[0].type_uniform, UniformType::Pmc);
    assert!(op.loadout[0].has(LoadoutSlot::CombatShirt));
    assert!(!op.loadout[0].has(LoadoutSlot::Helmet));
}

#[test]
fn test_unknown_role_is_recruit() {
    let op: OperatorSnapshot =
        serde_json::from_str(r#"{"id":"op-1","codename":"X","role":"chaplain"}"#).unwrap();
    assert_eq!(op.role, Role::Recruit);
}

#[test]
fn test_legacy_arsenal_code_keeps_operator() {
    let json = r#"{
        "id": "op-3",
        "codename": "Hawk",
        "xp": null,
        "category": 9,
        "arsenal": [
            {"id": "w1", "name": "Old rifle", "category": 7, "fps": 420},
            {"id": "w2", "name": null, "category": 4, "is_secondary": null}
        ]
    }"#;

    let op: OperatorSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(op.xp, 0);
    assert_eq!(op.category, None);
    assert_eq!(op.arsenal.len(), 2);
    assert_eq!(op.arsenal[0].category, None);
    assert_eq!(op.arsenal[0].fps, Some(420));
    assert_eq!(op.arsenal[1].category, Some(WeaponCategory::Support));
    assert!(!op.arsenal[1].is_secondary);
}

#[test]
fn test_payment_row() {
    let json = r#"{
        "id": "p1",
        "amount": 100.0,
        "status": "paid",
        "category": "monthly_fee",
        "reference": "04/2026",
        "operator": "op-1",
        "due_date": "2026-04-10T00:00:00Z",
        "updated_at": "2026-04-09T18:00:00Z"
    }"#;
    let payment: PaymentRecord = serde_json::from_str(json).unwrap();
    assert_eq!(payment.category, PaymentCategory::MonthlyFee);
    assert!(payment.is_punctual());
}

#[test]
fn test_unknown_payment_category_is_others() {
    let payment: PaymentRecord =
        serde_json::from_str(r#"{"id":"p2","category":"raffle"}"#).unwrap();
    assert_eq!(payment.category, PaymentCategory::Others);
}

#[test]
fn test_maintenance_and_schedule_rows() {
    let record: MaintenanceRecord = serde_json::from_str(
        r#"{"id":"m1","type":["revision","upgrade"],"status":"completed","operator":"op-1"}"#,
    )
    .unwrap();
    assert!(record.is_completed());
    assert!(record.includes(MaintenanceKind::Upgrade));

    let mission: ScheduleEvent = serde_json::from_str(
        r#"{"id":"s1","type":"maintenance","status":"completed","leader":"op-1",
            "operators":["op-1","op-2"],"attended":["op-1"]}"#,
    )
    .unwrap();
    assert_eq!(mission.kind, ScheduleKind::Maintenance);
    assert!(mission.led_by("op-1"));
    assert_eq!(mission.attendance_ratio(), Some(0.5));

    let sparse: ScheduleEvent = serde_json::from_str(
        r#"{"id":"s2","type":"training","operators":null,"attended":null}"#,
    )
    .unwrap();
    assert!(sparse.operators.is_empty());
    assert_eq!(sparse.attendance_ratio(), None);
}

#[test]
fn test_patch_serializes_only_changes() {
    let before = OperatorSnapshot::new("op-1", "Ghost");
    let mut after = before.clone();
    after.xp = 150;
    after.badges.insert("rank_recruta");

    let patch = OperatorPatch::between(&before, &after);
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({"xp": 150, "badges": ["rank_recruta"]}));
}
