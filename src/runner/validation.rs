use crate::models::Validation;

pub const PASSED_REASON: &str = "所有验证通过";

/// 关键词校验：每个关键词（忽略大小写）都必须作为子串出现在内容中
pub fn validate_keywords(content: &str, keywords: &[String]) -> Validation {
    let content = content.to_lowercase();
    let (found, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|kw| content.contains(&kw.to_lowercase()));

    if missing.is_empty() {
        return Validation {
            passed: true,
            reason: PASSED_REASON.to_string(),
            found_keywords: found,
            missing_keywords: Vec::new(),
        };
    }

    Validation {
        passed: false,
        reason: format!("缺少关键词: {}", quoted_list(&missing)),
        found_keywords: found,
        missing_keywords: missing,
    }
}

/// 以 `['a', 'b']` 形式列出关键词
fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kws(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quoted_list_escapes_quotes() {
        assert_eq!(quoted_list(&[]), "[]");
        assert_eq!(quoted_list(&kws(&["it's", "a\\b"])), "['it\\'s', 'a\\\\b']");
    }

    #[test]
    fn test_case_insensitive_match() {
        let validation = validate_keywords("this is OK", &kws(&["ok"]));
        assert!(validation.passed);
        assert_eq!(validation.reason, PASSED_REASON);
        assert_eq!(validation.found_keywords, kws(&["ok"]));
        assert!(validation.missing_keywords.is_empty());
    }

    #[test]
    fn test_uppercase_keyword() {
        assert!(validate_keywords("hello world", &kws(&["WORLD"])).passed);
    }

    #[test]
    fn test_missing_keywords_in_input_order() {
        let validation = validate_keywords("北京今天晴", &kws(&["天气", "北京", "温度"]));
        assert!(!validation.passed);
        assert_eq!(validation.found_keywords, kws(&["北京"]));
        assert_eq!(validation.missing_keywords, kws(&["天气", "温度"]));
        assert_eq!(validation.reason, "缺少关键词: ['天气', '温度']");
    }

    #[test]
    fn test_no_keywords_passes() {
        let validation = validate_keywords("", &[]);
        assert!(validation.passed);
        assert!(validation.found_keywords.is_empty());
    }

    proptest! {
        #[test]
        fn prop_found_and_missing_partition_keywords(
            content in "[a-zA-Z ]{0,40}",
            keywords in prop::collection::vec("[a-zA-Z]{1,4}", 0..6)
        ) {
            let validation = validate_keywords(&content, &keywords);
            prop_assert_eq!(
                validation.found_keywords.len() + validation.missing_keywords.len(),
                keywords.len()
            );
            prop_assert_eq!(validation.passed, validation.missing_keywords.is_empty());
            for kw in &validation.found_keywords {
                prop_assert!(content.to_lowercase().contains(&kw.to_lowercase()));
            }
        }

        #[test]
        fn prop_keyword_from_content_always_found(
            prefix in "[a-z ]{0,10}",
            keyword in "[a-zA-Z]{1,8}",
            suffix in "[a-z ]{0,10}"
        ) {
            let content = format!("{prefix}{}{suffix}", keyword.to_uppercase());
            prop_assert!(validate_keywords(&content, &[keyword]).passed);
        }
    }
}
