use crate::storage::filter::Predicate;
use crate::storage::record::QUESTION_FAMILY;

/// Translates optional search text and tags into a scan predicate.
///
/// The text must appear verbatim (case-sensitive) in the title. Each tag must
/// appear as a substring of the stored comma-joined tag list, so `"go"` also
/// matches a question tagged `"golang"`. Without any condition every record
/// matches.
// TODO: store tags as a real set column and switch tag conditions to exact membership.
pub fn build_query(text: Option<&str>, tags: Option<&[String]>) -> Predicate {
    let mut conditions = Vec::new();

    if let Some(text) = text
        && !text.is_empty()
    {
        conditions.push(Predicate::column_contains(QUESTION_FAMILY, "title", text));
    }

    for tag in tags.unwrap_or_default() {
        conditions.push(Predicate::column_contains(QUESTION_FAMILY, "tags", tag));
    }

    if conditions.is_empty() {
        Predicate::MatchAll
    } else {
        Predicate::All(conditions)
    }
}
