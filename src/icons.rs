// ASCII-safe icons that render in any terminal.

pub struct Icons;

impl Icons {
    // Status
    pub const OK: &'static str = "[+]";
    pub const FAIL: &'static str = "[x]";
    pub const BUSY: &'static str = "[~]";
    pub const INFO: &'static str = "[i]";

    // Panels
    pub const WALLET: &'static str = "[W]";
    pub const MINT: &'static str = "[M]";
    pub const BALANCE: &'static str = "[$]";
    pub const NETWORK: &'static str = "[N]";
    pub const LINK: &'static str = "[@]";

    // UI
    pub const ARROW_RIGHT: &'static str = ">";
}
