#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ToggleWallet,
    ToggleHelp,
    CycleTheme,
    FasterChart,
    SlowerChart,
    Refresh,
    None,
}
