//! Lifestyle health-risk scoring. Seven independent category scores are
//! summed from fixed threshold rules, then combined into a weighted
//! composite clamped to 0-100. Raw category sums are deliberately uncapped;
//! only the composite clamps, so concern ranking keeps full resolution.

use serde::Serialize;

use crate::models::user::{ActivityLevel, DietHabit, OccupationType, ScreenTimeLevel};

/// Everything the scorer needs, already resolved. Loading and validating
/// this from a stored profile or a request body is the caller's problem
/// (see `services::profile`).
#[derive(Debug, Clone, Copy)]
pub struct AssessmentProfile {
    pub age: i32,
    pub bmi: f64,
    pub diet: DietHabit,
    pub activity: ActivityLevel,
    pub screen_time: ScreenTimeLevel,
    pub occupation: OccupationType,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Metabolic,
    Cardiovascular,
    EyeStrain,
    Musculoskeletal,
    MentalHealth,
    Digestive,
    Respiratory,
}

impl RiskCategory {
    /// Fixed enumeration order; also the stable tie-break order for concern
    /// ranking.
    pub const ALL: [RiskCategory; 7] = [
        RiskCategory::Metabolic,
        RiskCategory::Cardiovascular,
        RiskCategory::EyeStrain,
        RiskCategory::Musculoskeletal,
        RiskCategory::MentalHealth,
        RiskCategory::Digestive,
        RiskCategory::Respiratory,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            RiskCategory::Metabolic => "Metabolic Health",
            RiskCategory::Cardiovascular => "Heart Health",
            RiskCategory::EyeStrain => "Eye Health",
            RiskCategory::Musculoskeletal => "Bone & Joint Health",
            RiskCategory::MentalHealth => "Mental Wellbeing",
            RiskCategory::Digestive => "Digestive Health",
            RiskCategory::Respiratory => "Respiratory Health",
        }
    }

    /// Composite weights; sum to 1.00.
    pub fn weight(self) -> f64 {
        match self {
            RiskCategory::Metabolic => 0.20,
            RiskCategory::Cardiovascular => 0.20,
            RiskCategory::EyeStrain => 0.15,
            RiskCategory::Musculoskeletal => 0.15,
            RiskCategory::MentalHealth => 0.15,
            RiskCategory::Digestive => 0.10,
            RiskCategory::Respiratory => 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Severe,
}

impl RiskBand {
    /// Shared bands for the composite and per-category severity labels.
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            RiskBand::Low
        } else if score < 60.0 {
            RiskBand::Moderate
        } else if score < 80.0 {
            RiskBand::High
        } else {
            RiskBand::Severe
        }
    }
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// WHO BMI band, display only. The raw BMI number drives scoring.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BmiCategory {
    pub label: &'static str,
    pub risk: RiskBand,
    pub description: &'static str,
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory {
            label: "Underweight",
            risk: RiskBand::Moderate,
            description: "Below healthy weight range",
        }
    } else if bmi < 25.0 {
        BmiCategory {
            label: "Normal",
            risk: RiskBand::Low,
            description: "Healthy weight range",
        }
    } else if bmi < 30.0 {
        BmiCategory {
            label: "Overweight",
            risk: RiskBand::Moderate,
            description: "Above healthy weight range",
        }
    } else if bmi < 35.0 {
        BmiCategory {
            label: "Obese Class I",
            risk: RiskBand::High,
            description: "Obesity - increased health risks",
        }
    } else if bmi < 40.0 {
        BmiCategory {
            label: "Obese Class II",
            risk: RiskBand::High,
            description: "Severe obesity - significant health risks",
        }
    } else {
        BmiCategory {
            label: "Obese Class III",
            risk: RiskBand::Severe,
            description: "Morbid obesity - critical health risks",
        }
    }
}

fn metabolic_score(p: &AssessmentProfile) -> f64 {
    let mut score = 0.0;
    if p.bmi < 18.5 {
        score += 30.0;
    } else if p.bmi >= 25.0 && p.bmi < 30.0 {
        score += 40.0;
    } else if p.bmi >= 30.0 {
        score += 70.0;
    }
    score += match p.diet {
        DietHabit::Junk => 30.0,
        DietHabit::Outside => 20.0,
        DietHabit::Mixed => 10.0,
        DietHabit::Homemade => 0.0,
    };
    score += match p.activity {
        ActivityLevel::Low => 25.0,
        ActivityLevel::Moderate => 10.0,
        ActivityLevel::High => 0.0,
    };
    score
}

fn cardiovascular_score(p: &AssessmentProfile) -> f64 {
    let mut score = 0.0;
    if p.age > 45 {
        score += 20.0;
    }
    if p.bmi >= 25.0 {
        score += 30.0;
    }
    if p.activity == ActivityLevel::Low {
        score += 30.0;
    }
    if p.occupation == OccupationType::WorkingProfessional {
        score += 15.0;
    }
    if matches!(p.diet, DietHabit::Junk | DietHabit::Outside) {
        score += 20.0;
    }
    score
}

fn eye_strain_score(p: &AssessmentProfile) -> f64 {
    let mut score = match p.screen_time {
        ScreenTimeLevel::Heavy => 60.0,
        ScreenTimeLevel::Moderate => 35.0,
        ScreenTimeLevel::Low => 15.0,
    };
    if p.age > 40 {
        score += 15.0;
    }
    if matches!(
        p.occupation,
        OccupationType::WorkingProfessional | OccupationType::Student
    ) {
        score += 20.0;
    }
    score
}

fn musculoskeletal_score(p: &AssessmentProfile) -> f64 {
    let mut score = 0.0;
    if p.activity == ActivityLevel::Low {
        score += 40.0;
    }
    if p.occupation == OccupationType::WorkingProfessional {
        score += 25.0;
    }
    if p.age > 50 {
        score += 20.0;
    }
    if p.bmi >= 30.0 {
        score += 20.0;
    }
    score
}

fn mental_health_score(p: &AssessmentProfile) -> f64 {
    let mut score = 0.0;
    if p.screen_time == ScreenTimeLevel::Heavy {
        score += 35.0;
    }
    if p.activity == ActivityLevel::Low {
        score += 30.0;
    }
    if p.occupation == OccupationType::WorkingProfessional {
        score += 20.0;
    }
    if p.diet == DietHabit::Junk {
        score += 15.0;
    }
    score
}

fn digestive_score(p: &AssessmentProfile) -> f64 {
    let mut score = match p.diet {
        DietHabit::Junk => 50.0,
        DietHabit::Outside => 35.0,
        _ => 0.0,
    };
    if p.activity == ActivityLevel::Low {
        score += 20.0;
    }
    if p.occupation == OccupationType::WorkingProfessional {
        score += 15.0;
    }
    score
}

fn respiratory_score(p: &AssessmentProfile) -> f64 {
    let mut score = 0.0;
    if p.activity == ActivityLevel::Low {
        score += 20.0;
    }
    if p.age > 50 {
        score += 15.0;
    }
    score
}

pub fn category_score(category: RiskCategory, profile: &AssessmentProfile) -> f64 {
    match category {
        RiskCategory::Metabolic => metabolic_score(profile),
        RiskCategory::Cardiovascular => cardiovascular_score(profile),
        RiskCategory::EyeStrain => eye_strain_score(profile),
        RiskCategory::Musculoskeletal => musculoskeletal_score(profile),
        RiskCategory::MentalHealth => mental_health_score(profile),
        RiskCategory::Digestive => digestive_score(profile),
        RiskCategory::Respiratory => respiratory_score(profile),
    }
}

/// Raw, uncapped per-category sums.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryScores {
    pub metabolic: f64,
    pub cardiovascular: f64,
    pub eye_strain: f64,
    pub musculoskeletal: f64,
    pub mental_health: f64,
    pub digestive: f64,
    pub respiratory: f64,
}

impl CategoryScores {
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Metabolic => self.metabolic,
            RiskCategory::Cardiovascular => self.cardiovascular,
            RiskCategory::EyeStrain => self.eye_strain,
            RiskCategory::Musculoskeletal => self.musculoskeletal,
            RiskCategory::MentalHealth => self.mental_health,
            RiskCategory::Digestive => self.digestive,
            RiskCategory::Respiratory => self.respiratory,
        }
    }
}

/// One ranked concern, annotated for clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Concern {
    pub category: RiskCategory,
    pub display_name: &'static str,
    pub score: f64,
    pub severity: RiskBand,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub scores: CategoryScores,
    pub overall_score: u32,
    pub risk_level: RiskBand,
    pub top_concerns: Vec<Concern>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

pub fn assess(profile: &AssessmentProfile) -> RiskAssessment {
    let scores = CategoryScores {
        metabolic: metabolic_score(profile),
        cardiovascular: cardiovascular_score(profile),
        eye_strain: eye_strain_score(profile),
        musculoskeletal: musculoskeletal_score(profile),
        mental_health: mental_health_score(profile),
        digestive: digestive_score(profile),
        respiratory: respiratory_score(profile),
    };

    let weighted: f64 = RiskCategory::ALL
        .iter()
        .map(|&c| scores.get(c) * c.weight())
        .sum();
    let overall_score = weighted.round().clamp(0.0, 100.0) as u32;

    RiskAssessment {
        scores,
        overall_score,
        risk_level: RiskBand::from_score(overall_score as f64),
        top_concerns: top_concerns(&scores),
        bmi: (profile.bmi * 100.0).round() / 100.0,
        bmi_category: bmi_category(profile.bmi),
    }
}

/// Top three categories by raw score. The sort is stable over
/// `RiskCategory::ALL`, so exact ties keep enumeration order.
pub fn top_concerns(scores: &CategoryScores) -> Vec<Concern> {
    let mut ranked: Vec<(RiskCategory, f64)> = RiskCategory::ALL
        .iter()
        .map(|&c| (c, scores.get(c)))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(3)
        .map(|(category, score)| Concern {
            category,
            display_name: category.display_name(),
            score,
            severity: RiskBand::from_score(score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high_risk_profile() -> AssessmentProfile {
        AssessmentProfile {
            age: 50,
            bmi: 32.0,
            diet: DietHabit::Junk,
            activity: ActivityLevel::Low,
            screen_time: ScreenTimeLevel::Heavy,
            occupation: OccupationType::WorkingProfessional,
        }
    }

    #[test]
    fn test_category_sums_for_high_risk_profile() {
        let p = high_risk_profile();
        assert_eq!(metabolic_score(&p), 125.0);
        assert_eq!(cardiovascular_score(&p), 115.0);
        assert_eq!(eye_strain_score(&p), 95.0);
        assert_eq!(musculoskeletal_score(&p), 85.0);
        assert_eq!(mental_health_score(&p), 100.0);
        assert_eq!(digestive_score(&p), 85.0);
        assert_eq!(respiratory_score(&p), 20.0);
    }

    #[test]
    fn test_high_risk_composite_and_ranking() {
        let assessment = assess(&high_risk_profile());
        assert_eq!(assessment.overall_score, 100);
        assert_eq!(assessment.risk_level, RiskBand::Severe);

        let names: Vec<&str> = assessment
            .top_concerns
            .iter()
            .map(|c| c.display_name)
            .collect();
        assert_eq!(names, vec!["Metabolic Health", "Heart Health", "Mental Wellbeing"]);
        assert_eq!(assessment.top_concerns[0].severity, RiskBand::Severe);
    }

    #[test]
    fn test_low_risk_profile() {
        let p = AssessmentProfile {
            age: 25,
            bmi: 22.0,
            diet: DietHabit::Homemade,
            activity: ActivityLevel::High,
            screen_time: ScreenTimeLevel::Low,
            occupation: OccupationType::Retired,
        };
        let assessment = assess(&p);
        assert_eq!(assessment.scores.metabolic, 0.0);
        assert_eq!(assessment.scores.eye_strain, 15.0);
        assert_eq!(assessment.overall_score, 2);
        assert_eq!(assessment.risk_level, RiskBand::Low);
    }

    #[test]
    fn test_tied_scores_keep_enumeration_order() {
        let p = AssessmentProfile {
            age: 20,
            bmi: 22.0,
            diet: DietHabit::Homemade,
            activity: ActivityLevel::High,
            screen_time: ScreenTimeLevel::Low,
            occupation: OccupationType::Retired,
        };
        // Eye strain is 15, everything else ties at 0.
        let concerns = assess(&p).top_concerns;
        assert_eq!(concerns[0].category, RiskCategory::EyeStrain);
        assert_eq!(concerns[1].category, RiskCategory::Metabolic);
        assert_eq!(concerns[2].category, RiskCategory::Cardiovascular);
    }

    #[test]
    fn test_composite_bounded_for_all_inputs() {
        let diets = [
            DietHabit::Homemade,
            DietHabit::Mixed,
            DietHabit::Outside,
            DietHabit::Junk,
        ];
        let activities = [ActivityLevel::Low, ActivityLevel::Moderate, ActivityLevel::High];
        let screens = [
            ScreenTimeLevel::Low,
            ScreenTimeLevel::Moderate,
            ScreenTimeLevel::Heavy,
        ];
        let occupations = [
            OccupationType::Student,
            OccupationType::WorkingProfessional,
            OccupationType::Homemaker,
            OccupationType::Retired,
        ];

        for diet in diets {
            for activity in activities {
                for screen_time in screens {
                    for occupation in occupations {
                        for age in [18, 41, 46, 51, 80] {
                            for bmi in [10.0, 18.5, 24.9, 29.9, 35.0, 80.0] {
                                let p = AssessmentProfile {
                                    age,
                                    bmi,
                                    diet,
                                    activity,
                                    screen_time,
                                    occupation,
                                };
                                let a = assess(&p);
                                assert!(a.overall_score <= 100);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_score(29.9), RiskBand::Low);
        assert_eq!(RiskBand::from_score(30.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(59.9), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(60.0), RiskBand::High);
        assert_eq!(RiskBand::from_score(79.9), RiskBand::High);
        assert_eq!(RiskBand::from_score(80.0), RiskBand::Severe);
    }

    #[test]
    fn test_bmi_math_and_bands() {
        let value = bmi(70.0, 175.0);
        assert!((value - 22.86).abs() < 0.01);

        assert_eq!(bmi_category(18.4).label, "Underweight");
        assert_eq!(bmi_category(18.5).label, "Normal");
        assert_eq!(bmi_category(24.9).label, "Normal");
        assert_eq!(bmi_category(25.0).label, "Overweight");
        assert_eq!(bmi_category(30.0).label, "Obese Class I");
        assert_eq!(bmi_category(35.0).label, "Obese Class II");
        assert_eq!(bmi_category(40.0).label, "Obese Class III");
        assert_eq!(bmi_category(40.0).risk, RiskBand::Severe);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = RiskCategory::ALL.iter().map(|c| c.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_age_thresholds_are_strict() {
        let base = AssessmentProfile {
            age: 45,
            bmi: 22.0,
            diet: DietHabit::Homemade,
            activity: ActivityLevel::High,
            screen_time: ScreenTimeLevel::Low,
            occupation: OccupationType::Homemaker,
        };
        assert_eq!(cardiovascular_score(&base), 0.0);
        let older = AssessmentProfile { age: 46, ..base };
        assert_eq!(cardiovascular_score(&older), 20.0);

        let fifty = AssessmentProfile { age: 50, ..base };
        assert_eq!(respiratory_score(&fifty), 0.0);
        let fifty_one = AssessmentProfile { age: 51, ..base };
        assert_eq!(respiratory_score(&fifty_one), 15.0);
    }
}
