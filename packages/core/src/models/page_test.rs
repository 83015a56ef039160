//! Tests for PageRecord

#[cfg(test)]
mod tests {
    use crate::models::{FileType, PageId, PageRecord};
    use chrono::Utc;

    fn page(title: &str, path: &str) -> PageRecord {
        PageRecord::new(PageId(1), title, path, Utc::now())
    }

    #[test]
    fn test_file_type_from_extension() {
        assert_eq!(page("a", "a.md").file_type, FileType::Note);
        assert_eq!(page("b", "boards/b.canvas").file_type, FileType::Canvas);
        assert_eq!(page("c", "boards/C.CANVAS").file_type, FileType::Canvas);
    }

    #[test]
    fn test_publish_sets_timestamp() {
        let mut record = page("Foo", "Foo.md");
        assert!(record.published_at.is_none());

        let now = Utc::now();
        record.publish(now);
        assert!(record.is_published);
        assert_eq!(record.published_at, Some(now));

        record.unpublish();
        assert!(!record.is_published);
        assert!(record.published_at.is_none());
    }

    #[test]
    fn test_windows_separators_normalized() {
        let record = page("Spec", r"Engineering\Specs\Spec.md");
        assert_eq!(record.file_path, "Engineering/Specs/Spec.md");
        assert_eq!(record.file_name(), "Spec.md");
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let record = page("Meeting Notes", "daily/2024-01-01.md");
        assert!(record.matches_link_key("meeting notes"));
        assert!(record.matches_link_key("MEETING NOTES"));
        assert!(!record.matches_link_key("meeting"));
    }

    #[test]
    fn test_matches_path_suffix() {
        let record = page("Something Else", "projects/Roadmap.md");
        assert!(record.matches_link_key("roadmap"));
        assert!(record.matches_link_key("projects/roadmap"));
        assert!(!record.matches_link_key("Roadmap.md"));
    }

    #[test]
    fn test_serializes_file_type_as_markdown() {
        let json = serde_json::to_value(page("Foo", "Foo.md")).unwrap();
        assert_eq!(json["fileType"], "markdown");
        assert_eq!(json["filePath"], "Foo.md");
        assert_eq!(json["id"], 1);
    }
}
