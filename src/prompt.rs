//! Prompt construction: maps (text, profile, flags) to the instruction
//! string submitted to the generation model.
//!
//! Pure string assembly. The profile rule table is static; adding a profile
//! is a data change here, not a control-flow change anywhere else.

use std::collections::HashMap;

const PREAMBLE: &str = "Rewrite the following text so it is easier to read for the reader described below.\n\
- IMMEDIATELY start with the rewritten text. Do not write any introduction, preface, or disclaimer.\n\
- Keep the original language of the text. Do not translate.\n";

const FALLBACK_INSTRUCTION: &str =
    "- Simplify and clarify the text while preserving its meaning.\n";

const SEPARATOR: &str = "\nOriginal text:\n";

/// Accessibility profiles with dedicated instruction templates.
/// Anything else falls back to a generic simplification prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dyslexia,
    Adhd,
    Aphasia,
    Autism,
}

impl Profile {
    /// Parse a wire tag (trimmed, case-insensitive). Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dyslexia" => Some(Self::Dyslexia),
            "adhd" => Some(Self::Adhd),
            "aphasia" => Some(Self::Aphasia),
            "autism" => Some(Self::Autism),
            _ => None,
        }
    }
}

struct ProfileRule {
    lead: &'static str,
    /// Ordered (flag name, instruction line) pairs. A line is appended only
    /// when the request maps that flag to true.
    flags: &'static [(&'static str, &'static str)],
}

const DYSLEXIA_RULE: ProfileRule = ProfileRule {
    lead: "The reader has dyslexia. Use plain words, short sentences, and a simple structure.\n",
    flags: &[
        (
            "fontMode",
            "- Avoid visually confusing words; prefer common, easily decoded spellings.\n",
        ),
        (
            "shorterParagraphs",
            "- Break the text into short paragraphs of two or three sentences each.\n",
        ),
        (
            "highlightKeywords",
            "- Mark the most important keywords in **bold**.\n",
        ),
    ],
};

const ADHD_RULE: ProfileRule = ProfileRule {
    lead: "The reader has ADHD. Keep the text concise and engaging, with one idea per sentence.\n",
    flags: &[
        (
            "chunking",
            "- Split the text into small chunks with a blank line between them.\n",
        ),
        (
            "bulletSummary",
            "- End with a short bullet-point summary of the key points.\n",
        ),
    ],
};

const APHASIA_RULE: ProfileRule = ProfileRule {
    lead: "The reader has aphasia. Use very short sentences in subject-verb-object order.\n",
    flags: &[
        (
            "simplify",
            "- Replace rare or abstract words with simple, everyday vocabulary.\n",
        ),
        (
            "shortSentences",
            "- Keep every sentence under ten words.\n",
        ),
    ],
};

const AUTISM_RULE: ProfileRule = ProfileRule {
    lead: "The reader is autistic. Be literal, precise, and unambiguous.\n",
    flags: &[
        (
            "idiomSimplification",
            "- Replace idioms and figures of speech with their literal meaning.\n",
        ),
        (
            "useEmojis",
            "- Add an emoji after key sentences to clarify emotional context.\n",
        ),
    ],
};

fn rule_for(profile: Profile) -> &'static ProfileRule {
    match profile {
        Profile::Dyslexia => &DYSLEXIA_RULE,
        Profile::Adhd => &ADHD_RULE,
        Profile::Aphasia => &APHASIA_RULE,
        Profile::Autism => &AUTISM_RULE,
    }
}

/// Build the full instruction prompt for one request.
///
/// Absent flags read as false; flag names the profile does not recognize are
/// ignored. Every input produces a valid prompt, including empty text.
pub fn build_prompt(text: &str, profile_tag: &str, options: &HashMap<String, bool>) -> String {
    let mut prompt = String::from(PREAMBLE);

    match Profile::parse(profile_tag) {
        Some(profile) => {
            let rule = rule_for(profile);
            prompt.push_str(rule.lead);
            for (flag, instruction) in rule.flags {
                if options.get(*flag).copied().unwrap_or(false) {
                    prompt.push_str(instruction);
                }
            }
        }
        None => prompt.push_str(FALLBACK_INSTRUCTION),
    }

    prompt.push_str(SEPARATOR);
    prompt.push_str(text);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(pairs: &[(&str, bool)]) -> HashMap<String, bool> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn dyslexia_without_flags_has_preamble_lead_and_verbatim_text() {
        let text = "The quick brown fox.";
        let prompt = build_prompt(text, "dyslexia", &HashMap::new());

        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.contains(DYSLEXIA_RULE.lead));
        assert!(prompt.ends_with(&format!("{SEPARATOR}{text}")));
    }

    #[test]
    fn adhd_includes_only_truthy_flags() {
        let prompt = build_prompt(
            "Hello.",
            "adhd",
            &flags(&[("chunking", true), ("bulletSummary", false)]),
        );

        assert!(prompt.contains("blank line between them"));
        assert!(!prompt.contains("bullet-point summary"));
    }

    #[test]
    fn unknown_profile_gets_exactly_the_fallback_instruction() {
        let prompt = build_prompt("Hello.", "blindness", &flags(&[("chunking", true)]));

        assert!(prompt.contains(FALLBACK_INSTRUCTION));
        assert!(!prompt.contains(DYSLEXIA_RULE.lead));
        assert!(!prompt.contains(ADHD_RULE.lead));
        assert!(!prompt.contains(APHASIA_RULE.lead));
        assert!(!prompt.contains(AUTISM_RULE.lead));
        assert!(!prompt.contains("blank line between them"));
    }

    #[test]
    fn empty_flag_map_adds_only_the_lead_sentence() {
        let prompt = build_prompt("Hello.", "autism", &HashMap::new());

        assert!(prompt.contains(AUTISM_RULE.lead));
        for (_, instruction) in AUTISM_RULE.flags {
            assert!(!prompt.contains(instruction));
        }
    }

    #[test]
    fn unrecognized_flag_names_are_ignored() {
        let with_noise = build_prompt(
            "Hello.",
            "aphasia",
            &flags(&[("simplify", true), ("fontSize", true)]),
        );
        let without_noise = build_prompt("Hello.", "aphasia", &flags(&[("simplify", true)]));

        assert_eq!(with_noise, without_noise);
    }

    #[test]
    fn profile_tag_is_trimmed_and_lowercased() {
        let a = build_prompt("Hello.", " ADHD ", &HashMap::new());
        let b = build_prompt("Hello.", "adhd", &HashMap::new());

        assert_eq!(a, b);
    }

    #[test]
    fn construction_is_idempotent() {
        let options = flags(&[("chunking", true), ("bulletSummary", true)]);
        let a = build_prompt("Same input.", "adhd", &options);
        let b = build_prompt("Same input.", "adhd", &options);

        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_still_yields_a_valid_prompt() {
        let prompt = build_prompt("", "dyslexia", &HashMap::new());

        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.ends_with(SEPARATOR));
    }

    #[test]
    fn flag_lines_follow_table_order() {
        let prompt = build_prompt(
            "Hello.",
            "dyslexia",
            &flags(&[("highlightKeywords", true), ("shorterParagraphs", true)]),
        );

        let para = prompt.find("short paragraphs").unwrap();
        let keywords = prompt.find("**bold**").unwrap();
        assert!(para < keywords);
    }
}
