/// UseCase metadata used for identification and page titles
pub trait UseCaseMetadata {
    /// UseCase index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "register_presence")
    fn usecase_name() -> &'static str;

    /// Title shown in the UI
    fn display_name() -> &'static str;

    /// Subtitle / description
    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u501_register_presence"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
