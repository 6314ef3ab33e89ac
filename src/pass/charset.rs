//! Character classes and active pool building.

use super::PasswordRequest;

const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];
const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SPECIAL: &[char] = &[
    '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=',
    '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
];

/// A fixed, disjoint set of symbols usable in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    pub fn chars(self) -> &'static [char] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn size(self) -> usize {
        self.chars().len()
    }

    /// Whether a request draws from this class. Lowercase always is.
    pub fn enabled(self, request: &PasswordRequest) -> bool {
        match self {
            CharClass::Lowercase => true,
            CharClass::Uppercase => request.uppercase,
            CharClass::Digit => request.digits,
            CharClass::Special => request.special,
        }
    }
}

/// Classes that must appear at least once: every enabled class but lowercase.
pub fn forced(request: &PasswordRequest) -> Vec<CharClass> {
    active(request)
        .into_iter()
        .filter(|c| *c != CharClass::Lowercase)
        .collect()
}

/// Every class the request draws from. Lowercase is always first.
pub fn active(request: &PasswordRequest) -> Vec<CharClass> {
    CharClass::ALL
        .into_iter()
        .filter(|c| c.enabled(request))
        .collect()
}

/// Build the active pool as the union of the enabled classes.
pub fn build(request: &PasswordRequest) -> Vec<char> {
    let mut chars: Vec<char> = Vec::with_capacity(size(request));
    for class in active(request) {
        chars.extend_from_slice(class.chars());
    }
    chars
}

/// Size of the active pool (for entropy and capacity calculation).
pub fn size(request: &PasswordRequest) -> usize {
    active(request).iter().map(|c| c.size()).sum()
}

/// Number of distinct passwords a request can produce.
///
/// Counts strings over the active pool that hit every forced class, by
/// inclusion-exclusion over the forced classes left out. Returns `None` when
/// the count does not fit in a `u128`.
pub fn capacity(request: &PasswordRequest) -> Option<u128> {
    let pool = size(request) as u128;
    let forced = forced(request);
    let length = u32::try_from(request.length).ok()?;

    let mut added: u128 = 0;
    let mut removed: u128 = 0;
    for mask in 0u32..(1 << forced.len()) {
        let excluded: u128 = forced
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| c.size() as u128)
            .sum();
        let term = (pool - excluded).checked_pow(length)?;
        if mask.count_ones() % 2 == 0 {
            added = added.checked_add(term)?;
        } else {
            removed = removed.checked_add(term)?;
        }
    }
    Some(added - removed)
}
