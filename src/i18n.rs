use serde::Deserialize;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    ZhCn,
    EnUs,
}

impl Language {
    pub fn detect() -> Self {
        if let Some(locale_tag) = sys_locale::get_locale() {
            return Self::from_locale_tag(&locale_tag);
        }

        Self::EnUs
    }

    fn from_locale_tag(raw: &str) -> Self {
        let tag = raw.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return Self::EnUs;
        }

        let is_chinese = tag.starts_with("zh")
            || tag == "cn"
            || tag.starts_with("cn_")
            || tag.starts_with("cn-")
            || tag.contains("_zh")
            || tag.contains("-zh");
        if is_chinese {
            return Self::ZhCn;
        }

        Self::EnUs
    }

    /// The label the language menu shows for this language.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::ZhCn => "简体中文",
            Self::EnUs => "English",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::ZhCn => "zh_CN.json",
            Self::EnUs => "en_US.json",
        }
    }
}

macro_rules! locale_message_fields {
    ($macro:ident) => {
        $macro! {
            language_button,
            section_home,
            section_skills_experience,
            section_portfolio,
            section_contact,
            page_welcome,
            page_interests,
            page_favorites,
            page_dreams,
            page_skills,
            page_experience,
            page_games,
            page_backend_projects,
            page_three_sins,
            page_smile_recovery,
            page_contact,
            last_updated,
            last_updated_date,
            panel_game_details,
            panel_game_description,
            panel_production,
            official_entry_badge,
            award_winning_badge,
            label_title,
            label_genre,
            label_tags,
            label_platform,
            label_theme,
            label_project_page,
            label_team_size,
            label_her_role,
            label_tech_tools,
            watch_video_hint,
            send_email_tooltip,
            wikipedia_tooltip,
            image_unavailable,
            enable_logging_button,
            disable_logging_button,
            open_logs_button,
        }
    };
}

macro_rules! define_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug, Deserialize)]
        #[serde(deny_unknown_fields)]
        struct RawLocaleMessages {
            $(
                $field: String,
            )+
        }
    };
}

macro_rules! define_locale_messages {
    ($($field:ident),+ $(,)?) => {
        #[derive(Debug)]
        pub struct LocaleMessages {
            $(
                pub $field: &'static str,
            )+
        }
    };
}

macro_rules! impl_from_raw_locale_messages {
    ($($field:ident),+ $(,)?) => {
        impl From<RawLocaleMessages> for LocaleMessages {
            fn from(raw: RawLocaleMessages) -> Self {
                Self {
                    $(
                        $field: leak_str(raw.$field),
                    )+
                }
            }
        }
    };
}

locale_message_fields!(define_raw_locale_messages);
locale_message_fields!(define_locale_messages);
locale_message_fields!(impl_from_raw_locale_messages);

fn leak_str(value: String) -> &'static str {
    Box::leak(value.into_boxed_str())
}

static ZH_CN_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();
static EN_US_MESSAGES: OnceLock<LocaleMessages> = OnceLock::new();

#[derive(Clone, Copy, Debug)]
pub struct I18n {
    messages: &'static LocaleMessages,
}

impl I18n {
    pub fn new(lang: Language) -> Self {
        Self {
            messages: messages_for(lang),
        }
    }
}

impl Deref for I18n {
    type Target = LocaleMessages;

    fn deref(&self) -> &Self::Target {
        self.messages
    }
}

fn messages_for(lang: Language) -> &'static LocaleMessages {
    match lang {
        Language::ZhCn => ZH_CN_MESSAGES.get_or_init(|| load_messages(Language::ZhCn)),
        Language::EnUs => EN_US_MESSAGES.get_or_init(|| load_messages(Language::EnUs)),
    }
}

fn load_messages(lang: Language) -> LocaleMessages {
    match try_load_messages(lang) {
        Ok(messages) => messages,
        Err(primary_err) => {
            crate::debug_log!(
                "[i18n] failed to load {}: {}",
                lang.file_name(),
                primary_err
            );

            if lang == Language::EnUs {
                panic!(
                    "failed to load i18n file {}: {}",
                    lang.file_name(),
                    primary_err
                );
            }

            match try_load_messages(Language::EnUs) {
                Ok(messages) => {
                    crate::debug_log!(
                        "[i18n] fallback to {} after {} failed",
                        Language::EnUs.file_name(),
                        lang.file_name()
                    );
                    messages
                }
                Err(fallback_err) => panic!(
                    "failed to load i18n files {} ({}) and {} ({})",
                    lang.file_name(),
                    primary_err,
                    Language::EnUs.file_name(),
                    fallback_err
                ),
            }
        }
    }
}

fn try_load_messages(lang: Language) -> Result<LocaleMessages, String> {
    let (path, raw) = load_locale_file(lang.file_name())?;
    crate::debug_log!(
        "[i18n] loading locale {} from {}",
        lang.file_name(),
        path.display()
    );

    serde_json::from_str::<RawLocaleMessages>(&raw)
        .map(LocaleMessages::from)
        .map_err(|err| format!("{} parse failed: {}", path.display(), err))
}

fn load_locale_file(file_name: &str) -> Result<(PathBuf, String), String> {
    let candidates = crate::assets::asset_dir_candidates("i18n");
    for dir in &candidates {
        let path = dir.join(file_name);
        if !path.is_file() {
            continue;
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|err| format!("{} read failed: {}", path.display(), err))?;
        return Ok((path, raw));
    }

    let searched = candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!(
        "{} not found; searched directories: {}",
        file_name, searched
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_locale_files_match_the_message_struct() {
        // deny_unknown_fields plus required fields means this fails on any
        // drift between the JSON files and the field list above.
        for lang in [Language::EnUs, Language::ZhCn] {
            let messages = try_load_messages(lang)
                .unwrap_or_else(|err| panic!("{}: {err}", lang.file_name()));
            assert!(!messages.language_button.is_empty());
            assert!(!messages.last_updated_date.is_empty());
        }
    }

    #[test]
    fn locale_tags_resolve() {
        assert_eq!(Language::from_locale_tag("zh-CN"), Language::ZhCn);
        assert_eq!(Language::from_locale_tag("zh_Hans_CN"), Language::ZhCn);
        assert_eq!(Language::from_locale_tag("en-US"), Language::EnUs);
        assert_eq!(Language::from_locale_tag(""), Language::EnUs);
        assert_eq!(Language::from_locale_tag("fr-FR"), Language::EnUs);
    }
}
