//! Contact form field value objects

/// The five fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    ProjectType,
    Budget,
    Message,
}

impl FieldName {
    /// Every field, in form order
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::ProjectType,
        FieldName::Budget,
        FieldName::Message,
    ];

    /// Fields that must be filled before submitting
    pub const REQUIRED: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Key used in the submitted payload
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::ProjectType => "projectType",
            FieldName::Budget => "budget",
            FieldName::Message => "message",
        }
    }

    /// Identifier of the inline error text attached to this field
    pub fn error_element_id(self) -> String {
        format!("{}-error", self.as_str())
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Position in form order
    pub fn index(self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::ProjectType => 2,
            FieldName::Budget => 3,
            FieldName::Message => 4,
        }
    }
}

/// A selectable option: submitted value and displayed label
pub type ChoiceOption = (&'static str, &'static str);

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Choice {
        options: &'static [ChoiceOption],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Visual validation marking of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    Neutral,
    Error,
    Success,
}

/// The inline error text shown under a field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorText {
    pub text: String,
    pub visible: bool,
}

/// Represents a single form field with its configuration, value and
/// validation display state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    pub mark: FieldMark,
    pub error_text: ErrorText,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName, label: &str, is_multiline: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            mark: FieldMark::Neutral,
            error_text: ErrorText::default(),
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(name: FieldName, label: &str, options: &'static [ChoiceOption]) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            is_multiline: false,
            mark: FieldMark::Neutral,
            error_text: ErrorText::default(),
        }
    }

    /// The submitted value: the text, or the selected option's value
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|(value, _)| *value)
                .unwrap_or(""),
        }
    }

    /// Set the text value (ignored for choice fields)
    pub fn set_text(&mut self, value: String) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value;
        }
    }

    /// Push a character to a text field
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Select the next option, starting from the first
    pub fn next_choice(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None => 0,
                Some(i) => (i + 1) % options.len(),
            });
        }
    }

    /// Select the previous option, wrapping to the last
    pub fn prev_choice(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                None | Some(0) => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice { .. })
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Drop error/success marking and hide the error text
    pub fn clear_marks(&mut self) {
        self.mark = FieldMark::Neutral;
        self.error_text = ErrorText::default();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|(_, label)| format!("‹ {label} ›"))
                .unwrap_or_else(|| "‹ Sélectionnez ›".to_string()),
        }
    }
}
