//! Body mass index.

/// Measurement system of the weight/height inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmiUnits {
    /// Kilograms and centimeters.
    #[default]
    Metric,
    /// Pounds and inches.
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

/// Computes BMI; `None` unless both inputs are positive.
pub fn compute_bmi(weight: f64, height: f64, units: BmiUnits) -> Option<Bmi> {
    if !(weight > 0.0 && height > 0.0) {
        return None;
    }
    let value = match units {
        BmiUnits::Metric => {
            let meters = height / 100.0;
            weight / (meters * meters)
        }
        BmiUnits::Imperial => weight / (height * height) * 703.0,
    };
    Some(Bmi {
        value,
        category: BmiCategory::from_bmi(value),
    })
}

#[cfg(test)]
mod tests {
    use super::{compute_bmi, BmiCategory, BmiUnits};

    #[test]
    fn category_thresholds_are_exclusive_upper_bounds() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn non_positive_inputs_have_no_result() {
        assert!(compute_bmi(0.0, 170.0, BmiUnits::Metric).is_none());
        assert!(compute_bmi(70.0, -1.0, BmiUnits::Imperial).is_none());
        assert!(compute_bmi(f64::NAN, 170.0, BmiUnits::Metric).is_none());
    }
}
