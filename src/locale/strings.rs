//! Static localized UI-string bundles served to the rendering layer.
//!
//! Field names serialize in camelCase so the payload matches what the
//! rendering code already consumes.

use serde::Serialize;

use crate::locale::Locale;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiStrings {
    pub header: Header,
    pub quick_links: QuickLinks,
    pub growth_journey: GrowthJourney,
    pub surah_list: SurahList,
}

#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub search: &'static str,
    pub user: &'static str,
    pub settings: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickLinks {
    pub about: &'static str,
    pub al_mulk: &'static str,
    pub yaseen: &'static str,
    pub al_kahf: &'static str,
    pub al_waqiah: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthJourney {
    pub title: &'static str,
    pub reading_goals: &'static str,
    pub create_goal: &'static str,
    pub learning_plans: &'static str,
    pub see_all_plans: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahList {
    pub recently_read: &'static str,
    pub bookmarks: &'static str,
    pub search: &'static str,
    pub ayahs: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub page: &'static str,
}

/// The UI-string bundle for one locale.
pub fn bundle(locale: Locale) -> UiStrings {
    match locale {
        Locale::En => UiStrings {
            header: Header {
                title: "Quran.co",
                search: "What do you want to read?",
                user: "User profile",
                settings: "Settings",
            },
            quick_links: QuickLinks {
                about: "About The Quran",
                al_mulk: "Al Mulk",
                yaseen: "Yaseen",
                al_kahf: "Al Kahf",
                al_waqiah: "Al Waqi'ah",
            },
            growth_journey: GrowthJourney {
                title: "Quran Growth Journey",
                reading_goals: "Custom Quran Reading Goals",
                create_goal: "Create Goal",
                learning_plans: "Learning Plans",
                see_all_plans: "See All Plans",
            },
            surah_list: SurahList {
                recently_read: "Recently Read",
                bookmarks: "Bookmarks",
                search: "Search surah...",
                ayahs: "Ayahs",
                previous: "Previous",
                next: "Next",
                page: "Page {current} of {total}",
            },
        },
        Locale::Ar => UiStrings {
            header: Header {
                title: "القرآن",
                search: "ماذا تريد أن تقرأ؟",
                user: "الملف الشخصي",
                settings: "الإعدادات",
            },
            quick_links: QuickLinks {
                about: "عن القرآن",
                al_mulk: "الملك",
                yaseen: "يس",
                al_kahf: "الكهف",
                al_waqiah: "الواقعة",
            },
            growth_journey: GrowthJourney {
                title: "رحلة النمو القرآني",
                reading_goals: "أهداف القراءة المخصصة",
                create_goal: "إنشاء هدف",
                learning_plans: "خطط التعلم",
                see_all_plans: "عرض جميع الخطط",
            },
            surah_list: SurahList {
                recently_read: "قرئت مؤخراً",
                bookmarks: "المرجعية",
                search: "البحث عن سورة...",
                ayahs: "آيات",
                previous: "السابق",
                next: "التالي",
                page: "الصفحة {current} من {total}",
            },
        },
        Locale::Id => UiStrings {
            header: Header {
                title: "Quran.co",
                search: "Apa yang ingin Anda baca?",
                user: "Profil pengguna",
                settings: "Pengaturan",
            },
            quick_links: QuickLinks {
                about: "Tentang Al-Quran",
                al_mulk: "Al-Mulk",
                yaseen: "Yasin",
                al_kahf: "Al-Kahf",
                al_waqiah: "Al-Waqi'ah",
            },
            growth_journey: GrowthJourney {
                title: "Perjalanan Pertumbuhan Al-Quran",
                reading_goals: "Target Membaca Al-Quran",
                create_goal: "Buat Target",
                learning_plans: "Rencana Pembelajaran",
                see_all_plans: "Lihat Semua Rencana",
            },
            surah_list: SurahList {
                recently_read: "Baru Dibaca",
                bookmarks: "Penanda",
                search: "Cari surah...",
                ayahs: "Ayat",
                previous: "Sebelumnya",
                next: "Selanjutnya",
                page: "Halaman {current} dari {total}",
            },
        },
        Locale::Ja => UiStrings {
            header: Header {
                title: "クルアーン",
                search: "何を読みたいですか？",
                user: "ユーザープロフィール",
                settings: "設定",
            },
            quick_links: QuickLinks {
                about: "クルアーンについて",
                al_mulk: "アル・ムルク章",
                yaseen: "ヤー・スィーン章",
                al_kahf: "洞窟章",
                al_waqiah: "出来事章",
            },
            growth_journey: GrowthJourney {
                title: "クルアーン学習の旅",
                reading_goals: "カスタム読書目標",
                create_goal: "目標を作成",
                learning_plans: "学習プラン",
                see_all_plans: "すべてのプランを見る",
            },
            surah_list: SurahList {
                recently_read: "最近読んだ",
                bookmarks: "ブックマーク",
                search: "スーラを検索...",
                ayahs: "節",
                previous: "前へ",
                next: "次へ",
                page: "{total}ページ中{current}ページ目",
            },
        },
        Locale::Zh => UiStrings {
            header: Header {
                title: "古兰经",
                search: "你想读什么？",
                user: "用户资料",
                settings: "设置",
            },
            quick_links: QuickLinks {
                about: "关于古兰经",
                al_mulk: "国权章",
                yaseen: "雅辛章",
                al_kahf: "山洞章",
                al_waqiah: "大事章",
            },
            growth_journey: GrowthJourney {
                title: "古兰经学习之旅",
                reading_goals: "自定义阅读目标",
                create_goal: "创建目标",
                learning_plans: "学习计划",
                see_all_plans: "查看所有计划",
            },
            surah_list: SurahList {
                recently_read: "最近阅读",
                bookmarks: "书签",
                search: "搜索章节...",
                ayahs: "节",
                previous: "上一页",
                next: "下一页",
                page: "第 {current} 页，共 {total} 页",
            },
        },
        Locale::Ko => UiStrings {
            header: Header {
                title: "꾸란",
                search: "무엇을 읽고 싶으신가요?",
                user: "사용자 프로필",
                settings: "설정",
            },
            quick_links: QuickLinks {
                about: "꾸란에 대하여",
                al_mulk: "알-물크 장",
                yaseen: "야신 장",
                al_kahf: "동굴 장",
                al_waqiah: "사건 장",
            },
            growth_journey: GrowthJourney {
                title: "꾸란 학습 여정",
                reading_goals: "맞춤 독서 목표",
                create_goal: "목표 만들기",
                learning_plans: "학습 계획",
                see_all_plans: "모든 계획 보기",
            },
            surah_list: SurahList {
                recently_read: "최근에 읽은",
                bookmarks: "북마크",
                search: "수라 검색...",
                ayahs: "절",
                previous: "이전",
                next: "다음",
                page: "총 {total}페이지 중 {current}페이지",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::ALL_LOCALES;

    #[test]
    fn test_every_locale_has_a_bundle() {
        for locale in ALL_LOCALES {
            let strings = bundle(locale);
            assert!(!strings.header.title.is_empty());
            assert!(!strings.surah_list.page.is_empty());
        }
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let json = serde_json::to_value(bundle(Locale::En)).unwrap();
        assert!(json.get("quickLinks").is_some());
        assert_eq!(
            json["surahList"]["recentlyRead"],
            serde_json::json!("Recently Read")
        );
    }

    #[test]
    fn test_page_template_keeps_placeholders() {
        for locale in ALL_LOCALES {
            let page = bundle(locale).surah_list.page;
            assert!(page.contains("{current}"), "{locale}: {page}");
            assert!(page.contains("{total}"), "{locale}: {page}");
        }
    }
}
