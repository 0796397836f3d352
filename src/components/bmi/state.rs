#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BmiError {
    #[error("please enter valid values")]
    InvalidInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
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
            Self::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    /// Rounded to one decimal place.
    pub value: f64,
    pub category: BmiCategory,
}

pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<Bmi, BmiError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(weight_kg) || !valid(height_cm) {
        return Err(BmiError::InvalidInput);
    }
    let height_m = height_cm / 100.0;
    let value = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;
    Ok(Bmi {
        value,
        category: BmiCategory::from_bmi(value),
    })
}

#[derive(Default)]
pub struct BmiCalculator {
    pub weight: String,
    pub height: String,
    pub result: Option<Result<Bmi, BmiError>>,
}

impl BmiCalculator {
    pub fn calculate(&mut self) {
        let parse = |raw: &str| raw.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.result = Some(calculate_bmi(parse(&self.weight), parse(&self.height)));
    }
}
