/// A step taken while factoring an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `ab + ac = a(b + c)`
    CommonFactor,

    /// `a/b + a/c = a/(b + c)`
    CommonDivision,

    /// `a^b * a^c = a^(b + c)`
    AddExponents,

    /// `a^b / a^c = a^(b - c)`
    SubtractExponents,

    /// `b^a * c^a = (bc)^a`
    CommonExponent,
}
