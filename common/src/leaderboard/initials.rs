pub const INITIALS_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialsError {
    Empty,
    TooLong { found: usize, max: usize },
    InvalidCharacter(char),
}

impl std::fmt::Display for InitialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitialsError::Empty => write!(f, "Initials are empty"),
            InitialsError::TooLong { found, max } => {
                write!(f, "Initials too long: found {}, at most {}", found, max)
            }
            InitialsError::InvalidCharacter(c) => write!(f, "Invalid initials character: {:?}", c),
        }
    }
}

impl std::error::Error for InitialsError {}

/// Upper-cases and checks initials: one to three ASCII letters.
pub fn normalize_initials(raw: &str) -> Result<String, InitialsError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InitialsError::Empty);
    }
    if let Some(c) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(InitialsError::InvalidCharacter(c));
    }
    let count = trimmed.chars().count();
    if count > INITIALS_LEN {
        return Err(InitialsError::TooLong {
            found: count,
            max: INITIALS_LEN,
        });
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Letters typed while the game waits for initials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialsBuffer {
    letters: String,
}

impl InitialsBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an ASCII letter, upper-cased. Anything else, or a fourth
    /// letter, is ignored.
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() || self.letters.len() >= INITIALS_LEN {
            return false;
        }
        self.letters.push(c.to_ascii_uppercase());
        true
    }

    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    pub fn commit(&self) -> Result<String, InitialsError> {
        normalize_initials(&self.letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize_initials("abc"), Ok("ABC".to_string()));
        assert_eq!(normalize_initials(" q "), Ok("Q".to_string()));
    }

    #[test]
    fn test_normalize_rejects_bad_input() {
        assert_eq!(normalize_initials(""), Err(InitialsError::Empty));
        assert_eq!(normalize_initials("a1"), Err(InitialsError::InvalidCharacter('1')));
        assert_eq!(
            normalize_initials("ABCD"),
            Err(InitialsError::TooLong { found: 4, max: 3 })
        );
    }

    #[test]
    fn test_buffer_caps_at_three_letters() {
        let mut buffer = InitialsBuffer::new();
        for c in ['x', 'y', '7', 'z', 'w'] {
            buffer.push(c);
        }
        assert_eq!(buffer.as_str(), "XYZ");
        assert_eq!(buffer.pop(), Some('Z'));
        assert_eq!(buffer.commit(), Ok("XY".to_string()));
    }

    #[test]
    fn test_empty_buffer_does_not_commit() {
        assert_eq!(InitialsBuffer::new().commit(), Err(InitialsError::Empty));
    }
}
