//! Pocket calculator with chained binary operations and scientific functions.
//!
//! The state is a plain value; [`reduce`] applies one key press and
//! returns the next state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }
}

/// Unary functions of scientific mode; trigonometry takes degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Square,
    Factorial,
}

impl ScientificFn {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Sin => value.to_radians().sin(),
            Self::Cos => value.to_radians().cos(),
            Self::Tan => value.to_radians().tan(),
            Self::Log10 => value.log10(),
            Self::Ln => value.ln(),
            Self::Sqrt => value.sqrt(),
            Self::Square => value * value,
            Self::Factorial => factorial(value),
        }
    }
}

/// `n * (n - 1) * ...` down to a factor of at most one; `1` for `n <= 1`.
fn factorial(n: f64) -> f64 {
    if n.is_nan() {
        return f64::NAN;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }
    let mut acc = 1.0;
    let mut factor = n;
    while factor > 1.0 {
        acc *= factor;
        factor -= 1.0;
    }
    acc
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorAction {
    /// A single decimal digit `0..=9`.
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Clear,
    Scientific(ScientificFn),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub display: String,
    pub previous: Option<f64>,
    pub operation: Option<Operator>,
    pub waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous: None,
            operation: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    pub fn value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

pub fn reduce(state: &CalculatorState, action: CalculatorAction) -> CalculatorState {
    let mut next = state.clone();
    match action {
        CalculatorAction::Digit(digit) => {
            let digit = char::from(b'0' + digit.min(9));
            if next.waiting_for_operand || next.display == "0" {
                next.display = digit.to_string();
            } else {
                next.display.push(digit);
            }
            next.waiting_for_operand = false;
        }
        CalculatorAction::DecimalPoint => {
            if next.waiting_for_operand {
                next.display = "0.".to_string();
            } else if !next.display.contains('.') {
                next.display.push('.');
            }
            next.waiting_for_operand = false;
        }
        CalculatorAction::Operator(operator) => {
            let input = state.value();
            match (state.previous, state.operation) {
                (None, _) => next.previous = Some(input),
                (Some(previous), Some(pending)) => {
                    let result = pending.apply(previous, input);
                    next.display = format_number(result);
                    next.previous = Some(result);
                }
                (Some(_), None) => {}
            }
            next.waiting_for_operand = true;
            next.operation = Some(operator);
        }
        CalculatorAction::Equals => {
            if let (Some(previous), Some(pending)) = (state.previous, state.operation) {
                next.display = format_number(pending.apply(previous, state.value()));
                next.previous = None;
                next.operation = None;
                next.waiting_for_operand = true;
            }
        }
        CalculatorAction::Clear => next = CalculatorState::default(),
        CalculatorAction::Scientific(function) => {
            next.display = format_number(function.apply(state.value()));
            next.waiting_for_operand = true;
        }
    }
    next
}

/// Renders a result the way the display shows it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
