/// Classification of the raw `player` query string.
///
/// A username is checked first, so short all-hex strings like `"cafebabe"`
/// stay usernames; a UUID needs all 32 digits anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerQuery {
    Username(String),
    Uuid(PlayerIdentity),
    Invalid,
}

impl PlayerQuery {
    pub fn classify(raw: &str) -> Self {
        if is_username(raw) {
            PlayerQuery::Username(raw.to_string())
        } else if is_uuid(raw) {
            PlayerQuery::Uuid(PlayerIdentity::new(raw))
        } else {
            PlayerQuery::Invalid
        }
    }
}

fn is_username(s: &str) -> bool {
    (3..=16).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

fn is_uuid(s: &str) -> bool {
    match s.len() {
        32 => s.bytes().all(|b| b.is_ascii_hexdigit()),
        36 => {
            let groups: Vec<&str> = s.split('-').collect();
            groups.len() == 5
                && groups
                    .iter()
                    .zip([8, 4, 4, 4, 12])
                    .all(|(g, len)| g.len() == len && g.bytes().all(|b| b.is_ascii_hexdigit()))
        }
        _ => false,
    }
}

/// A player account id: 32 hex digits, stored without hyphens.
///
/// Hyphens are stripped at construction so the digit positions used by
/// [`PlayerIdentity::default_skin`] always index bare hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity(String);

impl PlayerIdentity {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().replace('-', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The model a player without a custom skin gets.
    ///
    /// This is Minecraft's own client-side selection rule: XOR the hex
    /// digits at positions 7, 15, 23 and 31 of the id (the low nibble of
    /// each 4-byte group); a nonzero result means the slim "alex" model.
    /// Identities of 16 characters or fewer are legacy ids and always
    /// render as "steve".
    pub fn default_skin(&self) -> DefaultSkin {
        if self.0.len() <= 16 {
            return DefaultSkin::Steve;
        }

        let nibble = |i: usize| {
            self.0
                .as_bytes()
                .get(i)
                .and_then(|b| (*b as char).to_digit(16))
                .unwrap_or(0)
        };

        if nibble(7) ^ nibble(15) ^ nibble(23) ^ nibble(31) != 0 {
            DefaultSkin::Alex
        } else {
            DefaultSkin::Steve
        }
    }
}

impl std::fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The two built-in fallback skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSkin {
    Steve,
    Alex,
}

impl DefaultSkin {
    /// File name of the bundled asset for this model.
    pub fn file_name(&self) -> &'static str {
        match self {
            DefaultSkin::Steve => "steve.png",
            DefaultSkin::Alex => "alex.png",
        }
    }
}
