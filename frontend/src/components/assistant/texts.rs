//! Interface strings in both languages.

use common::model::template::Language;

pub struct InterfaceTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub select_template: &'static str,
    pub templates_count: &'static str,
    pub search_placeholder: &'static str,
    pub favorites_only: &'static str,
    pub template_language: &'static str,
    pub interface_language: &'static str,
    pub variables: &'static str,
    pub edit_email: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub reset: &'static str,
    pub copy_subject: &'static str,
    pub copy_body: &'static str,
    pub copy_all: &'static str,
    pub copied: &'static str,
    pub copy_link: &'static str,
    pub link_copied: &'static str,
    pub open_in_mail: &'static str,
    pub download_eml: &'static str,
    pub preserve_edits: &'static str,
    pub no_template: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub copy_failed: &'static str,
    pub reset_warning: &'static str,
}

const FR: InterfaceTexts = InterfaceTexts {
    title: "Assistant pour rédaction de courriels aux clients",
    subtitle: "Bureau de la traduction",
    select_template: "Sélectionnez un modèle",
    templates_count: "modèles disponibles",
    search_placeholder: "Rechercher un modèle...",
    favorites_only: "Favoris seulement",
    template_language: "Langue du modèle :",
    interface_language: "Langue de l'interface :",
    variables: "Variables",
    edit_email: "Éditez votre courriel",
    subject: "Objet",
    body: "Corps du message",
    reset: "Réinitialiser",
    copy_subject: "Copier Objet",
    copy_body: "Copier Corps",
    copy_all: "Copier Tout",
    copied: "Copié !",
    copy_link: "Copier le lien",
    link_copied: "Lien copié.",
    open_in_mail: "Ouvrir dans le courrielleur",
    download_eml: "Télécharger .eml",
    preserve_edits: "Conserver mes modifications lors du remplissage",
    no_template: "Sélectionnez un modèle pour commencer",
    loading: "Chargement des modèles...",
    load_failed: "Impossible de charger les modèles",
    copy_failed: "La copie a échoué",
    reset_warning: "Êtes-vous sûr de vouloir réinitialiser toutes les variables ? Cette action ne peut pas être annulée.",
};

const EN: InterfaceTexts = InterfaceTexts {
    title: "Email Writing Assistant for Clients",
    subtitle: "Translation Bureau",
    select_template: "Select a template",
    templates_count: "templates available",
    search_placeholder: "Search for a template...",
    favorites_only: "Favorites only",
    template_language: "Template language:",
    interface_language: "Interface language:",
    variables: "Variables",
    edit_email: "Edit your email",
    subject: "Subject",
    body: "Message body",
    reset: "Reset",
    copy_subject: "Copy Subject",
    copy_body: "Copy Body",
    copy_all: "Copy All",
    copied: "Copied!",
    copy_link: "Copy link",
    link_copied: "Link copied.",
    open_in_mail: "Open in mail client",
    download_eml: "Download .eml",
    preserve_edits: "Keep my edits when filling variables",
    no_template: "Select a template to get started",
    loading: "Loading templates...",
    load_failed: "Could not load templates",
    copy_failed: "Copy failed",
    reset_warning: "Are you sure you want to reset all variables? This action cannot be undone.",
};

pub fn texts(language: Language) -> &'static InterfaceTexts {
    match language {
        Language::Fr => &FR,
        Language::En => &EN,
    }
}
