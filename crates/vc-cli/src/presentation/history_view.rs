use vc_core::classification::HistoryEntry;

/// The history card, newest first. `None` when there is nothing to show.
pub fn render_history(history: &[HistoryEntry]) -> Option<String> {
    if history.is_empty() {
        return None;
    }

    let mut out = String::from("Classification History\n");
    out.push_str("  Previously classified images in this session.\n");
    for (index, entry) in history.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {}\n      Confidence: {}%  [{}]\n",
            index + 1,
            entry.result.description(),
            entry.result.confidence_percent(),
            entry.image,
        ));
    }
    Some(out)
}
