//! Peer skill ratings.
//!
//! Aggregates the votes an operator received into a per-skill profile.
//! Averages are scaled by a confidence factor so a handful of enthusiastic
//! votes cannot unlock a mastery badge:
//!
//! weighted = (sum / votes) * min(votes / min_votes_required, 1)

use exodo_shared::RatingPage;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The six rated skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillAttribute {
    Aim,
    Tactics,
    Communication,
    Teamwork,
    Discipline,
    Stamina,
}

impl SkillAttribute {
    pub const ALL: [SkillAttribute; 6] = [
        SkillAttribute::Aim,
        SkillAttribute::Tactics,
        SkillAttribute::Communication,
        SkillAttribute::Teamwork,
        SkillAttribute::Discipline,
        SkillAttribute::Stamina,
    ];

    /// Key used in the vote payload
    pub fn field(self) -> &'static str {
        match self {
            SkillAttribute::Aim => "aim",
            SkillAttribute::Tactics => "tactics",
            SkillAttribute::Communication => "communication",
            SkillAttribute::Teamwork => "teamwork",
            SkillAttribute::Discipline => "discipline",
            SkillAttribute::Stamina => "stamina",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillAttribute::Aim => "Pontaria",
            SkillAttribute::Tactics => "Tática",
            SkillAttribute::Communication => "Comunicação",
            SkillAttribute::Teamwork => "Trabalho em Equipe",
            SkillAttribute::Discipline => "Disciplina",
            SkillAttribute::Stamina => "Resistência",
        }
    }

    pub fn mastery_slug(self) -> &'static str {
        match self {
            SkillAttribute::Aim => "master_aim",
            SkillAttribute::Tactics => "master_tactics",
            SkillAttribute::Communication => "master_communication",
            SkillAttribute::Teamwork => "master_teamwork",
            SkillAttribute::Discipline => "master_discipline",
            SkillAttribute::Stamina => "master_stamina",
        }
    }
}

/// Display tier for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTier {
    Recruta,
    Operador,
    Veterano,
    Elite,
    Lendario,
}

impl SkillTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 5.0 {
            SkillTier::Lendario
        } else if score >= 4.5 {
            SkillTier::Elite
        } else if score >= 3.5 {
            SkillTier::Veterano
        } else if score >= 2.0 {
            SkillTier::Operador
        } else {
            SkillTier::Recruta
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillTier::Lendario => "LENDÁRIO",
            SkillTier::Elite => "ELITE",
            SkillTier::Veterano => "VETERANO",
            SkillTier::Operador => "OPERADOR",
            SkillTier::Recruta => "RECRUTA",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            SkillTier::Lendario => "#dc143c",
            SkillTier::Elite => "#7c4dff",
            SkillTier::Veterano => "#daa520",
            SkillTier::Operador => "#081534",
            SkillTier::Recruta => "#388E3C",
        }
    }

    pub fn text_color(self) -> &'static str {
        match self {
            SkillTier::Veterano => "#111",
            _ => "#fff",
        }
    }
}

/// Aggregated score of one skill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SkillScore {
    pub attribute: SkillAttribute,
    pub sum: f64,
    pub average: f64,
    pub weighted: f64,
}

impl SkillScore {
    pub fn tier(&self) -> SkillTier {
        SkillTier::from_score(self.weighted)
    }
}

/// Confidence factor for a vote count, never above 1
pub fn confidence(votes: usize, min_votes_required: u32) -> f64 {
    if min_votes_required == 0 {
        return 1.0;
    }
    (votes as f64 / min_votes_required as f64).min(1.0)
}

/// Skill profile of one operator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillProfile {
    /// Votes counted, including malformed ones
    pub votes: usize,
    /// Votes whose payload could not be decoded
    pub malformed: usize,
    pub confidence: f64,
    pub scores: Vec<SkillScore>,
}

impl SkillProfile {
    /// Aggregate a page of ratings.
    ///
    /// A malformed payload is logged and contributes zero to every skill,
    /// but still counts as a vote. With zero votes every score is zero.
    pub fn aggregate(page: &RatingPage, min_votes_required: u32) -> Self {
        let votes = page.records.len();
        if page.total > votes {
            warn!(
                "Rating page holds {} of {} votes, aggregating the fetched ones",
                votes, page.total
            );
        }
        let mut sums = [0.0_f64; 6];
        let mut malformed = 0;

        for rating in &page.records {
            match rating.scores() {
                Ok(scores) => {
                    for (i, attribute) in SkillAttribute::ALL.iter().enumerate() {
                        if let Some(value) = scores.get(attribute.field()) {
                            if value.is_finite() {
                                sums[i] += value;
                            }
                        }
                    }
                }
                Err(e) => {
                    malformed += 1;
                    warn!(
                        "Ignoring malformed rating {} for {}: {}",
                        rating.id, rating.target, e
                    );
                }
            }
        }

        let confidence = confidence(votes, min_votes_required);
        let scores = SkillAttribute::ALL
            .iter()
            .zip(sums)
            .map(|(attribute, sum)| {
                let average = if votes > 0 { sum / votes as f64 } else { 0.0 };
                SkillScore {
                    attribute: *attribute,
                    sum,
                    average,
                    weighted: average * confidence,
                }
            })
            .collect();

        Self {
            votes,
            malformed,
            confidence,
            scores,
        }
    }

    pub fn score(&self, attribute: SkillAttribute) -> Option<&SkillScore> {
        self.scores.iter().find(|s| s.attribute == attribute)
    }

    /// Skills whose weighted score reaches `threshold`
    pub fn mastered(&self, threshold: f64) -> Vec<SkillAttribute> {
        if self.votes == 0 {
            return Vec::new();
        }
        self.scores
            .iter()
            .filter(|s| s.weighted >= threshold)
            .map(|s| s.attribute)
            .collect()
    }

    /// Mean of the weighted scores, used for the overall tier
    pub fn overall(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().map(|s| s.weighted).sum::<f64>() / self.scores.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exodo_shared::Rating;

    fn all_fives() -> Rating {
        Rating::new(
            "voter",
            "op-1",
            r#"{"aim":5,"tactics":5,"communication":5,"teamwork":5,"discipline":5,"stamina":5}"#,
        )
    }

    #[test]
    fn test_confidence_is_capped() {
        assert_eq!(confidence(0, 8), 0.0);
        assert_eq!(confidence(4, 8), 0.5);
        assert_eq!(confidence(8, 8), 1.0);
        assert_eq!(confidence(40, 8), 1.0);
        assert_eq!(confidence(3, 0), 1.0);
    }

    #[test]
    fn test_single_vote_is_not_mastery() {
        let page = RatingPage::from_records(vec![all_fives()]);
        let profile = SkillProfile::aggregate(&page, 8);

        let aim = profile.score(SkillAttribute::Aim).unwrap();
        assert_eq!(aim.average, 5.0);
        assert_eq!(aim.weighted, 0.625);
        assert!(profile.mastered(4.5).is_empty());
    }

    #[test]
    fn test_eight_votes_reach_mastery() {
        let page = RatingPage::from_records(vec![all_fives(); 8]);
        let profile = SkillProfile::aggregate(&page, 8);
        assert_eq!(profile.mastered(4.5).len(), 6);
    }

    #[test]
    fn test_zero_votes() {
        let profile = SkillProfile::aggregate(&RatingPage::default(), 8);
        assert_eq!(profile.votes, 0);
        assert!(profile.mastered(0.0).is_empty());
        assert!(profile.scores.iter().all(|s| s.weighted == 0.0));
    }

    #[test]
    fn test_malformed_vote_counts_as_zero() {
        let mut records = vec![all_fives(); 8];
        records.push(Rating::new("voter", "op-1", "not json"));
        let page = RatingPage::from_records(records);

        let profile = SkillProfile::aggregate(&page, 8);
        assert_eq!(profile.votes, 9);
        assert_eq!(profile.malformed, 1);

        // 40 / 9 = 4.44, below the threshold
        let aim = profile.score(SkillAttribute::Aim).unwrap();
        assert!(aim.weighted < 4.5);
        assert!(profile.mastered(4.5).is_empty());
    }

    #[test]
    fn test_partial_payloads() {
        let records = vec![Rating::new("v", "op-1", r#"{"aim":4}"#); 8];
        let profile = SkillProfile::aggregate(&RatingPage::from_records(records), 8);

        assert_eq!(profile.score(SkillAttribute::Aim).unwrap().weighted, 4.0);
        assert_eq!(profile.score(SkillAttribute::Stamina).unwrap().weighted, 0.0);
    }

    #[test]
    fn test_extra_keys_do_not_void_a_vote() {
        let vote = Rating::new(
            "voter",
            "op-1",
            r#"{"aim":5,"tactics":5,"communication":5,"teamwork":5,"discipline":5,"stamina":null,"comment":"great"}"#,
        );
        let page = RatingPage::from_records(vec![vote; 8]);
        let profile = SkillProfile::aggregate(&page, 8);

        assert_eq!(profile.malformed, 0);
        assert_eq!(profile.score(SkillAttribute::Aim).unwrap().weighted, 5.0);
        assert_eq!(profile.score(SkillAttribute::Stamina).unwrap().weighted, 0.0);
        assert_eq!(profile.mastered(4.5).len(), 5);
    }

    #[test]
    fn test_tiers() {
        assert_eq!(SkillTier::from_score(5.0), SkillTier::Lendario);
        assert_eq!(SkillTier::from_score(4.5), SkillTier::Elite);
        assert_eq!(SkillTier::from_score(3.5), SkillTier::Veterano);
        assert_eq!(SkillTier::from_score(2.0), SkillTier::Operador);
        assert_eq!(SkillTier::from_score(1.9), SkillTier::Recruta);
        assert_eq!(SkillTier::Veterano.text_color(), "#111");
    }
}
