use common::editor::Field;
use common::export::CopyTarget;
use common::model::catalog::TemplateCatalog;
use common::model::preferences::Preferences;
use common::model::template::Language;

pub enum Msg {
    PreferencesLoaded(Preferences),
    CatalogLoaded(Result<TemplateCatalog, String>),
    SetSearch(String),
    SetCategory(String),
    ToggleFavoritesOnly,
    ToggleFavorite(String),
    SavePreferences,
    SelectTemplate(String),
    SetInterfaceLanguage(Language),
    SetTemplateLanguage(Language),
    SetVariable(String, String),
    Edit(Field, String),
    TogglePreserveEdits,
    Reset,
    Copy(CopyTarget),
    Copied(CopyTarget),
    ClearCopied,
    CopyLink,
    OpenMailClient,
    DownloadEml,
    FocusSearch,
}
