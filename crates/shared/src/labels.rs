//! User-facing strings. The app is Arabic only.

pub const SAMPLE_FIELD: &str = "o";
pub const SEX_FIELD: &str = "Sex";
pub const HAPLOGROUP_FIELD: &str = "y";

pub const PREV_BUTTON: &str = "السابق";
pub const NEXT_BUTTON: &str = "التالي";
pub const CLOSE_BUTTON: &str = "إغلاق";
pub const LOADING: &str = "جاري تحميل البيانات...";
pub const SEARCH_PLACEHOLDER: &str = "ابحث عن عينة أو الجنس أو المجموعة الوراثية...";
pub const LOAD_FAILURE: &str = "حدث خطأ في تحميل البيانات";

/// Display label for a sheet column; unknown columns show their raw key.
pub fn field_label(field: &str) -> &str {
    match field {
        SAMPLE_FIELD => "العينة",
        SEX_FIELD => "الجنس",
        HAPLOGROUP_FIELD => "المجموعة الوراثية",
        other => other,
    }
}

/// "sample i of n", 1-based.
pub fn sample_counter(position: usize, total: usize) -> String {
    format!("عينة {} من {}", position, total)
}

/// Alert text shown when the sheet could not be loaded.
pub fn load_failure_message(detail: &str) -> String {
    format!("{}: {}", LOAD_FAILURE, detail)
}
