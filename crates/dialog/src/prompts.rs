//! Reply texts. The wording is product copy; only the numbering of menus
//! carries meaning for the state machine.

use bacbot_catalog::Filiere;

use crate::{input::RESET_TOKEN, message::QuickReply};

pub const WELCOME: &str = "👋 مرحباً! أنا بوت المعلم لمساعدتك في الدراسة للبكالوريا 🎓. يمكنني إرسال لك الدروس والفيديوهات 📚🎥.\n\n👇 اختر الفيلير الذي تريد:";
pub const NOT_UNDERSTOOD: &str = "⚠️ لم أفهم رسالتك. يمكنك كتابة 'مرحبا' للبدء من جديد.";
pub const INVALID_CHOICE: &str = "⚠️ الرجاء اختيار رقم صحيح. حاول مرة أخرى.";
pub const NOTHING_AVAILABLE: &str = "⚠️ لا توجد مواد متاحة لهذه المادة والفصل. حاول مرة أخرى.";
pub const NOT_FOUND: &str = "⚠️ المادة غير موجودة. حاول مرة أخرى.";
pub const MORE_VIDEOS: &str = "📚 هل تريد المزيد من الفيديوهات؟\n1- نعم ✅\n2- لا ❌";
pub const EXERCISE_SENT: &str =
    "📝 تم إرسال التمرين. هل تريد المزيد من التمارين؟\n1- نعم ✅\n2- لا ❌";
pub const MATERIAL_MENU_AGAIN: &str = "👇 اختر ما تريد:\n1- دروس 📚\n2- فيديوهات 🎥\n3- تمارين 📝";
pub const FAREWELL: &str = "👋 شكراً لاستخدامك البوت. يمكنك العودة في أي وقت!";
pub const UNEXPECTED: &str = "⚠️ حدث خطأ غير متوقع. حاول مرة أخرى.";

const BACK_TO_START_TITLE: &str = "العودة للبداية";

pub fn back_to_start() -> QuickReply {
    QuickReply::text(BACK_TO_START_TITLE, RESET_TOKEN)
}

fn filiere_emoji(filiere: Filiere) -> &'static str {
    match filiere {
        Filiere::SciencesMathA | Filiere::SciencesMathB => "🧮",
        Filiere::SciencesPhysiques => "🔬",
        Filiere::Svt => "🌱",
    }
}

pub fn filiere_menu() -> String {
    Filiere::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}- {} {}", i + 1, f.as_str(), filiere_emoji(*f)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn numbered<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}- {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn no_subjects(filiere: Filiere) -> String {
    format!("⚠️ لا توجد مواد متاحة للفيلير: {filiere}. الرجاء اختيار فيلير آخر.")
}

pub fn subject_menu(filiere: Filiere, subjects: &[String]) -> String {
    format!(
        "📚 اخترت الفيلير: {filiere}. الآن اختر المادة:\n{}",
        numbered(subjects.iter().map(String::as_str))
    )
}

pub fn semester_menu(subject: &str) -> String {
    format!(
        "📖 اخترت المادة: {subject}. الآن اختر الفصل الدراسي:\n1- الفصل الأول 📅\n2- الفصل الثاني 📅"
    )
}

pub fn material_menu(semester: u32) -> String {
    let label = if semester == 1 { "الأول" } else { "الثاني" };
    format!("📖 اخترت الفصل: {label}. الآن اختر ما تريد:\n1- دروس 📚\n2- فيديوهات 🎥\n3- تمارين 📝")
}

pub fn course_list<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
    format!("👇 اختر رقم المادة التي تريدها:\n{}", numbered(titles))
}

pub fn video_list<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
    format!("👇 اختر رقم الفيديو الذي تريده:\n{}", numbered(titles))
}

pub fn exercise_list<'a>(titles: impl IntoIterator<Item = &'a str>) -> String {
    format!("👇 اختر رقم التمرين الذي تريده:\n{}", numbered(titles))
}

pub fn course_sent(title: &str) -> String {
    format!("📚 تم إرسال ملف {title}. هل تريد المزيد من المواد؟\n1- نعم ✅\n2- لا ❌")
}

pub fn video_link(url: &str) -> String {
    format!("🎥 شاهد الفيديو هنا: {url}")
}
