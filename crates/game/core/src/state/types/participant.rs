use std::fmt;

/// Username of a registered account.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccountName(String);

impl AccountName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AccountName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Label for one side of a battle.
///
/// Only [`Participant::Registered`] sides own a ledger entry; the computer
/// opponent never accrues wins or losses.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Participant {
    Registered(AccountName),
    Computer,
}

impl Participant {
    /// Display label used for the computer opponent.
    pub const COMPUTER_LABEL: &'static str = "Computer";

    pub fn registered(name: impl Into<AccountName>) -> Self {
        Self::Registered(name.into())
    }

    /// Returns the account behind this participant, if any.
    pub fn account(&self) -> Option<&AccountName> {
        match self {
            Self::Registered(name) => Some(name),
            Self::Computer => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Registered(name) => name.as_str(),
            Self::Computer => Self::COMPUTER_LABEL,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computer_has_no_account() {
        assert_eq!(Participant::Computer.account(), None);
        assert_eq!(Participant::Computer.to_string(), "Computer");
    }

    #[test]
    fn registered_exposes_account() {
        let ash = Participant::registered("ash");
        assert_eq!(ash.account(), Some(&AccountName::new("ash")));
        assert_eq!(ash.label(), "ash");
    }

    #[test]
    fn account_named_computer_is_still_registered() {
        let impostor = Participant::registered("Computer");
        assert_ne!(impostor, Participant::Computer);
        assert!(impostor.account().is_some());
    }
}
