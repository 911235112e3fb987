//! Indian National AQI bands and PM2.5 conversion.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl AqiCategory {
    pub fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Satisfactory,
            101..=200 => AqiCategory::Moderate,
            201..=300 => AqiCategory::Poor,
            301..=400 => AqiCategory::VeryPoor,
            _ => AqiCategory::Severe,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    pub fn health_message(self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is satisfactory, and air pollution poses little or no risk."
            }
            AqiCategory::Satisfactory => {
                "Air quality is acceptable. However, there may be a risk for some people."
            }
            AqiCategory::Moderate => "Members of sensitive groups may experience health effects.",
            AqiCategory::Poor => "Everyone may begin to experience health effects.",
            AqiCategory::VeryPoor => {
                "Health alert: everyone may experience more serious health effects."
            }
            AqiCategory::Severe => {
                "Health warning of emergency conditions. Everyone is likely to be affected."
            }
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            AqiCategory::Good => "Enjoy outdoor activities!",
            AqiCategory::Satisfactory => {
                "Enjoy outdoor activities. Sensitive individuals should consider limiting prolonged outdoor exertion."
            }
            AqiCategory::Moderate => "Sensitive groups should reduce prolonged outdoor exertion.",
            AqiCategory::Poor => "Avoid prolonged outdoor exertion. Wear a mask if going outside.",
            AqiCategory::VeryPoor => {
                "Avoid outdoor activities. Use air purifier indoors. Wear N95 mask if you must go out."
            }
            AqiCategory::Severe => {
                "Stay indoors. Use air purifier. Avoid all outdoor activities. Wear N95 mask if absolutely necessary to go out."
            }
        }
    }
}

struct Breakpoint {
    c_low: f64,
    c_high: f64,
    aqi_low: f64,
    aqi_high: f64,
}

/// Indian AQI reporting segments for PM2.5 (µg/m³).
const PM25_BREAKPOINTS: [Breakpoint; 6] = [
    Breakpoint { c_low: 0.0, c_high: 30.0, aqi_low: 0.0, aqi_high: 50.0 },
    Breakpoint { c_low: 31.0, c_high: 60.0, aqi_low: 51.0, aqi_high: 100.0 },
    Breakpoint { c_low: 61.0, c_high: 90.0, aqi_low: 101.0, aqi_high: 200.0 },
    Breakpoint { c_low: 91.0, c_high: 120.0, aqi_low: 201.0, aqi_high: 300.0 },
    Breakpoint { c_low: 121.0, c_high: 250.0, aqi_low: 301.0, aqi_high: 400.0 },
    Breakpoint { c_low: 251.0, c_high: 999.0, aqi_low: 401.0, aqi_high: 500.0 },
];

/// Convert a PM2.5 concentration to an AQI value by linear interpolation
/// within its reporting segment. Concentrations matching no segment
/// (above the table, or in the one-unit gaps between published segments)
/// report the 500 ceiling.
pub fn pm25_to_aqi(pm25: f64) -> u16 {
    for bp in &PM25_BREAKPOINTS {
        if pm25 >= bp.c_low && pm25 <= bp.c_high {
            let aqi =
                (bp.aqi_high - bp.aqi_low) / (bp.c_high - bp.c_low) * (pm25 - bp.c_low) + bp.aqi_low;
            return aqi.round() as u16;
        }
    }
    500
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_endpoints() {
        assert_eq!(pm25_to_aqi(0.0), 0);
        assert_eq!(pm25_to_aqi(30.0), 50);
        assert_eq!(pm25_to_aqi(31.0), 51);
        assert_eq!(pm25_to_aqi(60.0), 100);
        assert_eq!(pm25_to_aqi(61.0), 101);
        assert_eq!(pm25_to_aqi(90.0), 200);
        assert_eq!(pm25_to_aqi(120.0), 300);
        assert_eq!(pm25_to_aqi(250.0), 400);
        assert_eq!(pm25_to_aqi(251.0), 401);
        assert_eq!(pm25_to_aqi(999.0), 500);
    }

    #[test]
    fn test_interpolation_within_segment() {
        // (100-51)/(60-31) * (45-31) + 51 = 74.66 -> 75
        assert_eq!(pm25_to_aqi(45.0), 75);
        // (200-101)/(90-61) * (82.5-61) + 101 = 174.4 -> 174
        assert_eq!(pm25_to_aqi(82.5), 174);
    }

    #[test]
    fn test_out_of_table_reports_ceiling() {
        assert_eq!(pm25_to_aqi(1000.0), 500);
        assert_eq!(pm25_to_aqi(5000.0), 500);
        // Fractional concentrations in the reporting gaps also fall through.
        assert_eq!(pm25_to_aqi(30.5), 500);
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(AqiCategory::from_aqi(0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(51), AqiCategory::Satisfactory);
        assert_eq!(AqiCategory::from_aqi(100), AqiCategory::Satisfactory);
        assert_eq!(AqiCategory::from_aqi(101), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(200), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(201), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(300), AqiCategory::Poor);
        assert_eq!(AqiCategory::from_aqi(301), AqiCategory::VeryPoor);
        assert_eq!(AqiCategory::from_aqi(400), AqiCategory::VeryPoor);
        assert_eq!(AqiCategory::from_aqi(401), AqiCategory::Severe);
        assert_eq!(AqiCategory::from_aqi(500), AqiCategory::Severe);
    }

    #[test]
    fn test_labels_match_bands() {
        assert_eq!(AqiCategory::from_aqi(42).label(), "Good");
        assert_eq!(AqiCategory::from_aqi(350).label(), "Very Poor");
    }
}
