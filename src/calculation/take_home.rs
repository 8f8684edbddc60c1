//! Take-home pay estimation.
//!
//! Derives a gross/net breakdown from a base pay, a performance allowance,
//! and other allowances, using the flat deduction estimates of the source
//! tables.

use rust_decimal::Decimal;
use serde::Serialize;

/// Gross monthly income above which the income-tax estimate applies, in
/// rupiah.
pub const TAXABLE_THRESHOLD: u64 = 4_500_000;

/// Returns the flat income-tax (PPh 21) estimate rate of 5%.
pub fn income_tax_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the health/employment insurance estimate rate of 1%.
pub fn insurance_rate() -> Decimal {
    Decimal::new(1, 2)
}

/// Estimated monthly deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deductions {
    /// Income tax (PPh 21) estimate. Zero at or below
    /// [`TAXABLE_THRESHOLD`].
    pub income_tax: Decimal,
    /// Insurance contribution estimate.
    pub insurance: Decimal,
    /// Other deductions. Always zero in the current tables.
    pub other: Decimal,
    /// Sum of all deductions.
    pub total: Decimal,
}

/// A gross/net take-home pay breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TakeHomePay {
    /// Monthly base pay, in rupiah.
    pub base_pay: u64,
    /// Monthly performance allowance, in rupiah.
    pub performance_allowance: u64,
    /// Other monthly allowances, in rupiah.
    pub other_allowances: u64,
    /// Gross monthly income, in rupiah.
    pub gross: u64,
    /// Estimated deductions.
    pub deductions: Deductions,
    /// Gross income minus total deductions.
    pub net: Decimal,
}

/// Estimates take-home pay from its components.
///
/// The deductions are flat estimates: 5% income tax once gross income
/// exceeds [`TAXABLE_THRESHOLD`], plus 1% insurance on all income.
///
/// # Arguments
///
/// * `base_pay` - Monthly base pay, in rupiah
/// * `performance_allowance` - Monthly performance allowance, in rupiah
/// * `other_allowances` - Other monthly allowances, in rupiah
///
/// # Examples
///
/// ```
/// use gaji_engine::calculation::calculate_take_home;
/// use rust_decimal::Decimal;
///
/// let pay = calculate_take_home(2_785_700, 0, 500_000);
/// assert_eq!(pay.gross, 3_285_700);
/// // Below the taxable threshold: only the 1% insurance applies.
/// assert_eq!(pay.deductions.income_tax, Decimal::ZERO);
/// assert_eq!(pay.deductions.insurance, Decimal::new(32_857, 0));
/// ```
pub fn calculate_take_home(
    base_pay: u64,
    performance_allowance: u64,
    other_allowances: u64,
) -> TakeHomePay {
    let gross = base_pay + performance_allowance + other_allowances;
    let gross_decimal = Decimal::from(gross);

    let income_tax = if gross > TAXABLE_THRESHOLD {
        gross_decimal * income_tax_rate()
    } else {
        Decimal::ZERO
    };
    let insurance = gross_decimal * insurance_rate();
    let total = income_tax + insurance;

    TakeHomePay {
        base_pay,
        performance_allowance,
        other_allowances,
        gross,
        net: gross_decimal - total,
        deductions: Deductions {
            income_tax,
            insurance,
            other: Decimal::ZERO,
            total,
        },
    }
}
