//! Unit, currency and file-size conversion.
//!
//! Linear categories go through a factor table: each unit's factor is its
//! size in the category's base unit, so `value * from / to`. Temperature is
//! piecewise through Celsius. Currency rates are units per US dollar.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    UnknownUnit { category: &'static str, unit: String },
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownUnit { category, unit } => {
                write!(f, "unknown {category} unit: `{unit}`")
            }
        }
    }
}

impl Error for ConvertError {}

/// Entry of a factor table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub key: &'static str,
    pub name: &'static str,
    pub factor: f64,
}

const fn unit(key: &'static str, name: &'static str, factor: f64) -> Unit {
    Unit { key, name, factor }
}

const LENGTH: &[Unit] = &[
    unit("meter", "Meter", 1.0),
    unit("kilometer", "Kilometer", 1000.0),
    unit("centimeter", "Centimeter", 0.01),
    unit("millimeter", "Millimeter", 0.001),
    unit("inch", "Inch", 0.0254),
    unit("foot", "Foot", 0.3048),
    unit("yard", "Yard", 0.9144),
    unit("mile", "Mile", 1609.34),
];

const WEIGHT: &[Unit] = &[
    unit("kilogram", "Kilogram", 1.0),
    unit("gram", "Gram", 0.001),
    unit("pound", "Pound", 0.453592),
    unit("ounce", "Ounce", 0.0283495),
    unit("ton", "Ton", 1000.0),
    unit("stone", "Stone", 6.35029),
];

const TEMPERATURE: &[Unit] = &[
    unit("celsius", "Celsius", 1.0),
    unit("fahrenheit", "Fahrenheit", 1.0),
    unit("kelvin", "Kelvin", 1.0),
];

const AREA: &[Unit] = &[
    unit("square-meter", "Square Meter", 1.0),
    unit("square-kilometer", "Square Kilometer", 1_000_000.0),
    unit("square-foot", "Square Foot", 0.092903),
    unit("acre", "Acre", 4046.86),
    unit("hectare", "Hectare", 10_000.0),
];

const FILE_SIZE: &[Unit] = &[
    unit("B", "Bytes", 1.0),
    unit("KB", "Kilobytes", 1024.0),
    unit("MB", "Megabytes", 1_048_576.0),
    unit("GB", "Gigabytes", 1_073_741_824.0),
    unit("TB", "Terabytes", 1_099_511_627_776.0),
    unit("PB", "Petabytes", 1_125_899_906_842_624.0),
];

/// US dollars buy this many units of each currency.
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.00),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.12),
    ("AUD", 1.35),
    ("CAD", 1.25),
    ("CHF", 0.92),
    ("CNY", 6.45),
    ("INR", 74.56),
    ("BRL", 5.20),
    ("RUB", 75.50),
    ("KRW", 1180.00),
    ("SGD", 1.35),
    ("HKD", 7.80),
    ("SEK", 8.65),
    ("NOK", 8.85),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Area,
}

impl UnitCategory {
    pub const ALL: [UnitCategory; 4] = [Self::Length, Self::Weight, Self::Temperature, Self::Area];

    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
            Self::Area => "Area",
        }
    }

    pub fn units(self) -> &'static [Unit] {
        match self {
            Self::Length => LENGTH,
            Self::Weight => WEIGHT,
            Self::Temperature => TEMPERATURE,
            Self::Area => AREA,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "celsius" => Some(Self::Celsius),
            "fahrenheit" => Some(Self::Fahrenheit),
            "kelvin" => Some(Self::Kelvin),
            _ => None,
        }
    }
}

/// Converts `value` between two units of `category`.
pub fn convert_units(
    category: UnitCategory,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConvertError> {
    if category == UnitCategory::Temperature {
        let from = TemperatureScale::parse(from).ok_or_else(|| unknown("temperature", from))?;
        let to = TemperatureScale::parse(to).ok_or_else(|| unknown("temperature", to))?;
        return Ok(convert_temperature(value, from, to));
    }
    convert_linear(category.name(), category.units(), value, from, to)
}

pub fn convert_temperature(value: f64, from: TemperatureScale, to: TemperatureScale) -> f64 {
    let celsius = match from {
        TemperatureScale::Celsius => value,
        TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        TemperatureScale::Kelvin => value - 273.15,
    };
    match to {
        TemperatureScale::Celsius => celsius,
        TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        TemperatureScale::Kelvin => celsius + 273.15,
    }
}

pub fn file_size_units() -> &'static [Unit] {
    FILE_SIZE
}

/// Converts between byte multiples (powers of 1024).
pub fn convert_file_size(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    convert_linear("file size", FILE_SIZE, value, from, to)
}

pub fn currency_codes() -> impl Iterator<Item = &'static str> {
    USD_RATES.iter().map(|(code, _)| *code)
}

/// Converts through US dollars using the static rate table.
pub fn convert_currency(amount: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let from_rate = usd_rate(from).ok_or_else(|| unknown("currency", from))?;
    let to_rate = usd_rate(to).ok_or_else(|| unknown("currency", to))?;
    Ok(amount / from_rate * to_rate)
}

fn usd_rate(code: &str) -> Option<f64> {
    USD_RATES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, rate)| *rate)
}

fn convert_linear(
    category: &'static str,
    table: &[Unit],
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConvertError> {
    let from_factor = factor(table, from).ok_or_else(|| unknown(category, from))?;
    let to_factor = factor(table, to).ok_or_else(|| unknown(category, to))?;
    Ok(value * from_factor / to_factor)
}

fn factor(table: &[Unit], key: &str) -> Option<f64> {
    table.iter().find(|unit| unit.key == key).map(|unit| unit.factor)
}

fn unknown(category: &'static str, unit: &str) -> ConvertError {
    ConvertError::UnknownUnit {
        category,
        unit: unit.to_string(),
    }
}
