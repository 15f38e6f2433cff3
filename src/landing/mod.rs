//! Landing feature - the static welcome screen in front of the catalog.

pub mod ui;

/// Bowl illustration shown above the welcome text.
pub const BOWL_ART: [&str; 6] = [
    r"      ( (  ( (      ",
    r"       ) )  ) )     ",
    r"   _______________  ",
    r"  \~~~~~~~~~~~~~~~/ ",
    r"   \  ~ ramen ~  /  ",
    r"    \___________/   ",
];

/// First welcome line.
pub const WELCOME: &str = "Welcome to,";

/// Restaurant name shown under the welcome line.
pub const TITLE: &str = "Ramen Restaurant";

/// Label of the button that opens the catalog.
pub const ENTER_LABEL: &str = "Enter";
