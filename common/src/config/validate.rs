pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub(crate) fn check_probability(name: &str, value: f64) -> Result<(), String> {
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} must be between 0.0 and 1.0", name));
    }
    Ok(())
}

pub(crate) fn check_positive(name: &str, value: u32) -> Result<(), String> {
    if value == 0 {
        return Err(format!("{} must be greater than 0", name));
    }
    Ok(())
}
