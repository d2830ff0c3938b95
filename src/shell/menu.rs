//! Menu choices offered by the shell.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new work type.
    AddWorkType,
    /// Show every registered work type.
    ListAll,
    /// Show the average final pay.
    AveragePay,
    /// End the session.
    Exit,
}

impl MenuChoice {
    /// Every choice, in the order the menu displays them.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddWorkType,
        MenuChoice::ListAll,
        MenuChoice::AveragePay,
        MenuChoice::Exit,
    ];

    /// Smallest menu number.
    pub const LOWEST: u32 = 0;
    /// Largest menu number.
    pub const HIGHEST: u32 = 3;

    /// Returns the number the user types for this choice.
    pub fn number(self) -> u32 {
        match self {
            Self::Exit => 0,
            Self::AddWorkType => 1,
            Self::ListAll => 2,
            Self::AveragePay => 3,
        }
    }

    /// Returns the menu text for this choice.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddWorkType => "Add work type",
            Self::ListAll => "Show all work types",
            Self::AveragePay => "Calculate average pay",
            Self::Exit => "Exit",
        }
    }

    /// Maps a menu number back to its choice.
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}
