//! Static advice catalog keyed by risk category and severity. Every
//! category carries a `high` bundle; only metabolic has a preventive
//! `moderate` bundle, so low-severity concerns in other categories are
//! silently skipped.

use serde::Serialize;

use crate::services::risk::{Concern, RiskBand, RiskCategory};

#[derive(Debug, Serialize)]
pub struct AdviceBundle {
    pub title: &'static str,
    pub problems: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<&'static str>,
}

/// An advice bundle annotated with the concern it was selected for.
#[derive(Debug, Serialize)]
pub struct Recommendation {
    pub category: RiskCategory,
    pub display_name: &'static str,
    pub score: f64,
    pub severity: RiskBand,
    #[serde(flatten)]
    pub advice: &'static AdviceBundle,
}

/// Map ranked concerns to advice bundles. High and severe concerns get the
/// `high` bundle; everything else gets the `moderate` bundle where one
/// exists.
pub fn personalized(concerns: &[Concern]) -> Vec<Recommendation> {
    concerns
        .iter()
        .filter_map(|concern| {
            advice_for(concern.category, concern.severity).map(|advice| Recommendation {
                category: concern.category,
                display_name: concern.display_name,
                score: concern.score,
                severity: concern.severity,
                advice,
            })
        })
        .collect()
}

pub fn advice_for(category: RiskCategory, severity: RiskBand) -> Option<&'static AdviceBundle> {
    let wants_high = matches!(severity, RiskBand::High | RiskBand::Severe);
    match (category, wants_high) {
        (RiskCategory::Metabolic, true) => Some(&METABOLIC_HIGH),
        (RiskCategory::Metabolic, false) => Some(&METABOLIC_MODERATE),
        (RiskCategory::Cardiovascular, true) => Some(&CARDIOVASCULAR_HIGH),
        (RiskCategory::EyeStrain, true) => Some(&EYE_STRAIN_HIGH),
        (RiskCategory::Musculoskeletal, true) => Some(&MUSCULOSKELETAL_HIGH),
        (RiskCategory::MentalHealth, true) => Some(&MENTAL_HEALTH_HIGH),
        (RiskCategory::Digestive, true) => Some(&DIGESTIVE_HIGH),
        (RiskCategory::Respiratory, true) => Some(&RESPIRATORY_HIGH),
        _ => None,
    }
}

static METABOLIC_HIGH: AdviceBundle = AdviceBundle {
    title: "Metabolic Health Concerns",
    problems: &[
        "Risk of Type 2 Diabetes",
        "Insulin Resistance",
        "Fatty Liver Disease",
        "Metabolic Syndrome",
    ],
    causes: &[
        "Poor diet high in processed foods and sugar",
        "Sedentary lifestyle",
        "Excess body weight",
        "Irregular eating patterns",
    ],
    recommendations: &[
        "Adopt a balanced diet rich in whole grains, vegetables, and lean proteins",
        "Limit sugar and processed food intake",
        "Engage in 150 minutes of moderate exercise weekly",
        "Monitor blood sugar levels regularly",
        "Maintain healthy body weight (BMI 18.5-24.9)",
        "Get 7-8 hours of quality sleep",
    ],
    urgency: Some(
        "Consult a doctor if you have family history of diabetes or notice symptoms like excessive thirst, frequent urination",
    ),
};

static METABOLIC_MODERATE: AdviceBundle = AdviceBundle {
    title: "Metabolic Health - Preventive Care",
    problems: &[],
    causes: &[],
    recommendations: &[
        "Maintain balanced diet with regular meal times",
        "Include 30 minutes of daily physical activity",
        "Stay hydrated (8-10 glasses of water daily)",
        "Annual health checkups including blood sugar tests",
    ],
    urgency: None,
};

static CARDIOVASCULAR_HIGH: AdviceBundle = AdviceBundle {
    title: "Heart Health Concerns",
    problems: &[
        "Increased risk of Heart Disease",
        "High Blood Pressure",
        "Stroke Risk",
        "Poor Circulation",
    ],
    causes: &[
        "High BMI and obesity",
        "Sedentary lifestyle",
        "Poor diet high in saturated fats",
        "Chronic stress",
        "Family history",
    ],
    recommendations: &[
        "Reduce salt intake (less than 5g per day)",
        "Eat heart-healthy foods: fish, nuts, olive oil, vegetables",
        "Exercise regularly - aim for 30 minutes daily",
        "Quit smoking and limit alcohol",
        "Manage stress through meditation or yoga",
        "Monitor blood pressure regularly",
        "Maintain healthy weight",
    ],
    urgency: Some(
        "Seek immediate medical attention for chest pain, shortness of breath, or irregular heartbeat",
    ),
};

static EYE_STRAIN_HIGH: AdviceBundle = AdviceBundle {
    title: "Eye Health & Digital Eye Strain",
    problems: &[
        "Computer Vision Syndrome",
        "Dry Eyes",
        "Blurred Vision",
        "Headaches",
        "Increased risk of Myopia",
    ],
    causes: &[
        "Excessive screen time (>8 hours daily)",
        "Poor lighting conditions",
        "Improper screen distance",
        "Lack of breaks",
        "Blue light exposure",
    ],
    recommendations: &[
        "Follow 20-20-20 rule: Every 20 minutes, look 20 feet away for 20 seconds",
        "Use blue light filters on devices",
        "Maintain proper screen distance (arm's length)",
        "Ensure good lighting - avoid glare",
        "Blink frequently to prevent dry eyes",
        "Use artificial tears if needed",
        "Get regular eye checkups",
        "Limit screen time before bed",
    ],
    urgency: Some("See an eye doctor if you experience persistent vision problems or eye pain"),
};

static MUSCULOSKELETAL_HIGH: AdviceBundle = AdviceBundle {
    title: "Bone & Joint Health",
    problems: &[
        "Lower Back Pain",
        "Neck and Shoulder Pain",
        "Joint Stiffness",
        "Osteoporosis Risk",
        "Muscle Weakness",
    ],
    causes: &[
        "Sedentary lifestyle",
        "Poor posture",
        "Lack of exercise",
        "Excess weight",
        "Aging",
        "Vitamin D deficiency",
    ],
    recommendations: &[
        "Practice good posture while sitting and standing",
        "Take regular breaks from sitting - stand every 30 minutes",
        "Strengthen core muscles through exercises",
        "Include weight-bearing exercises",
        "Ensure adequate calcium and Vitamin D intake",
        "Use ergonomic furniture",
        "Stretch regularly",
        "Maintain healthy weight",
    ],
    urgency: Some("Consult a doctor for persistent pain, numbness, or limited mobility"),
};

static MENTAL_HEALTH_HIGH: AdviceBundle = AdviceBundle {
    title: "Mental Wellbeing Concerns",
    problems: &[
        "Stress and Anxiety",
        "Depression Risk",
        "Sleep Disorders",
        "Burnout",
        "Social Isolation",
    ],
    causes: &[
        "Excessive screen time",
        "Work-related stress",
        "Lack of physical activity",
        "Poor sleep habits",
        "Social media overuse",
        "Unhealthy diet",
    ],
    recommendations: &[
        "Limit screen time, especially before bed",
        "Practice mindfulness or meditation (10-15 minutes daily)",
        "Exercise regularly - boosts mood naturally",
        "Maintain social connections",
        "Establish healthy sleep routine",
        "Take regular breaks from work",
        "Pursue hobbies and interests",
        "Seek professional help if needed",
    ],
    urgency: Some(
        "Seek professional help if experiencing persistent sadness, anxiety, or thoughts of self-harm",
    ),
};

static DIGESTIVE_HIGH: AdviceBundle = AdviceBundle {
    title: "Digestive Health Issues",
    problems: &[
        "Indigestion and Bloating",
        "Acid Reflux (GERD)",
        "Irritable Bowel Syndrome",
        "Constipation",
        "Gastritis",
    ],
    causes: &[
        "Poor diet - junk and processed foods",
        "Irregular eating patterns",
        "Lack of fiber",
        "Stress",
        "Insufficient water intake",
        "Sedentary lifestyle",
    ],
    recommendations: &[
        "Eat regular, balanced meals",
        "Include fiber-rich foods: fruits, vegetables, whole grains",
        "Drink 8-10 glasses of water daily",
        "Avoid spicy, oily, and processed foods",
        "Eat slowly and chew thoroughly",
        "Exercise regularly to improve digestion",
        "Manage stress levels",
        "Avoid eating late at night",
    ],
    urgency: Some(
        "See a doctor for persistent abdominal pain, blood in stool, or unexplained weight loss",
    ),
};

static RESPIRATORY_HIGH: AdviceBundle = AdviceBundle {
    title: "Respiratory Health",
    problems: &[
        "Breathing Difficulties",
        "Asthma Risk",
        "Chronic Cough",
        "Reduced Lung Capacity",
        "Air Pollution Effects",
    ],
    causes: &[
        "Poor air quality (high AQI)",
        "Lack of physical activity",
        "Smoking or secondhand smoke",
        "Indoor air pollution",
        "Allergies",
    ],
    recommendations: &[
        "Monitor AQI and limit outdoor activities when AQI > 200",
        "Use N95 masks in high pollution areas",
        "Keep indoor air clean - use air purifiers",
        "Practice breathing exercises",
        "Exercise regularly to improve lung capacity",
        "Avoid smoking and secondhand smoke",
        "Stay hydrated",
        "Get vaccinated (flu, pneumonia)",
    ],
    urgency: Some(
        "Seek immediate help for severe breathing difficulty, chest pain, or persistent cough with blood",
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{ActivityLevel, DietHabit, OccupationType, ScreenTimeLevel};
    use crate::services::risk::{assess, AssessmentProfile};

    #[test]
    fn test_high_and_severe_pick_high_bundle() {
        let high = advice_for(RiskCategory::Cardiovascular, RiskBand::High).unwrap();
        let severe = advice_for(RiskCategory::Cardiovascular, RiskBand::Severe).unwrap();
        assert_eq!(high.title, "Heart Health Concerns");
        assert_eq!(severe.title, high.title);
    }

    #[test]
    fn test_metabolic_has_preventive_bundle() {
        let bundle = advice_for(RiskCategory::Metabolic, RiskBand::Moderate).unwrap();
        assert_eq!(bundle.title, "Metabolic Health - Preventive Care");
        assert!(bundle.problems.is_empty());
        assert!(bundle.urgency.is_none());
    }

    #[test]
    fn test_moderate_without_bundle_is_skipped() {
        for category in [
            RiskCategory::Cardiovascular,
            RiskCategory::EyeStrain,
            RiskCategory::Musculoskeletal,
            RiskCategory::MentalHealth,
            RiskCategory::Digestive,
            RiskCategory::Respiratory,
        ] {
            assert!(advice_for(category, RiskBand::Moderate).is_none());
            assert!(advice_for(category, RiskBand::Low).is_none());
        }
    }

    #[test]
    fn test_every_category_has_high_bundle() {
        for category in RiskCategory::ALL {
            assert!(advice_for(category, RiskBand::High).is_some());
        }
    }

    #[test]
    fn test_personalized_annotates_concern_fields() {
        let profile = AssessmentProfile {
            age: 50,
            bmi: 32.0,
            diet: DietHabit::Junk,
            activity: ActivityLevel::Low,
            screen_time: ScreenTimeLevel::Heavy,
            occupation: OccupationType::WorkingProfessional,
        };
        let assessment = assess(&profile);
        let recommendations = personalized(&assessment.top_concerns);

        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].advice.title, "Metabolic Health Concerns");
        assert_eq!(recommendations[0].score, 125.0);
        assert_eq!(recommendations[0].severity, RiskBand::Severe);
        assert_eq!(recommendations[1].advice.title, "Heart Health Concerns");
        assert_eq!(recommendations[2].advice.title, "Mental Wellbeing Concerns");
    }
}
