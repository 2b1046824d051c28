//! Toast Notifications
//!
//! Toasts stack in arrival order; each one fades out and is removed on its own timer.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
        }
    }

    /// Lenient parse for values coming from inline handlers; unknown kinds fall back to success
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "error" => ToastKind::Error,
            "info" => ToastKind::Info,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Success,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the visible period is over and the fade-out has started
    pub leaving: bool,
}

impl Toast {
    pub fn class(&self) -> String {
        format!("toast {}", self.kind)
    }

    pub fn style(&self) -> &'static str {
        if self.leaving {
            "opacity: 0; transform: translateX(100px);"
        } else {
            ""
        }
    }
}

/// Currently displayed toasts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastList {
    items: Vec<Toast>,
    next_id: u32,
}

impl ToastList {
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Toast { id, message: message.into(), kind, leaving: false });
        id
    }

    pub fn start_leaving(&mut self, id: u32) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn get(&self, id: u32) -> Option<&Toast> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_stack_without_dedup() {
        let mut toasts = ToastList::default();
        let a = toasts.push("Saved", ToastKind::Success);
        let b = toasts.push("Saved", ToastKind::Success);

        assert_ne!(a, b);
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts.items()[0].id, a);
    }

    #[test]
    fn test_fade_then_remove() {
        let mut toasts = ToastList::default();
        let a = toasts.push("Error adding task", ToastKind::Error);
        let b = toasts.push("Task completed!", ToastKind::Success);

        toasts.start_leaving(a);
        assert!(toasts.get(a).unwrap().leaving);
        assert!(!toasts.get(b).unwrap().leaving);
        assert_eq!(toasts.get(a).unwrap().style(), "opacity: 0; transform: translateX(100px);");

        toasts.remove(a);
        assert_eq!(toasts.items().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut toasts = ToastList::default();
        toasts.start_leaving(42);
        toasts.remove(42);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_kind_parse_and_class() {
        assert_eq!(ToastKind::parse("info"), ToastKind::Info);
        assert_eq!(ToastKind::parse(""), ToastKind::Success);
        assert_eq!(ToastKind::parse("shout"), ToastKind::Success);

        let mut toasts = ToastList::default();
        let id = toasts.push("Deleting project...", ToastKind::Info);
        assert_eq!(toasts.get(id).unwrap().class(), "toast info");
    }
}
