use web_sys::File;

pub enum Msg {
    /// Click on the idle face: discard stale input, show the form.
    Activate,
    /// Click on the form background: flip back without submitting.
    Dismiss,
    SelectProvider(String),
    GoogleFontsLoaded(Vec<String>),
    FilesChosen(Vec<File>),
    Submit,
}
