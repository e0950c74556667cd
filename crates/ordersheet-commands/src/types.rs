use serde::{Deserialize, Serialize};
use std::fmt;

/// Thematic grouping of order commands
///
/// Variants are declared in display priority order (how often players reach
/// for them during a turn), so the derived `Ord` is the overlay order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandCategory {
    Combat,
    Movement,
    Construction,
    Design,
    Resource,
    Administration,
}

impl CommandCategory {
    /// All categories in display priority order
    pub const ALL: [CommandCategory; 6] = [
        CommandCategory::Combat,
        CommandCategory::Movement,
        CommandCategory::Construction,
        CommandCategory::Design,
        CommandCategory::Resource,
        CommandCategory::Administration,
    ];

    /// Lowercase identifier used in catalogue files
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandCategory::Combat => "combat",
            CommandCategory::Movement => "movement",
            CommandCategory::Construction => "construction",
            CommandCategory::Design => "design",
            CommandCategory::Resource => "resource",
            CommandCategory::Administration => "administration",
        }
    }

    /// Heading shown in the overlay
    pub fn display_name(&self) -> &'static str {
        match self {
            CommandCategory::Combat => "Combat",
            CommandCategory::Movement => "Movement",
            CommandCategory::Construction => "Construction",
            CommandCategory::Design => "Design",
            CommandCategory::Resource => "Resources",
            CommandCategory::Administration => "Administration",
        }
    }
}

impl fmt::Display for CommandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic kind of a command parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Ship,
    World,
    Coordinate,
    Empire,
    ShipClass,
    Number,
    Identifier,
    Storm,
    Portal,
    Count,
    List,
}

impl ParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterType::Ship => "ship",
            ParameterType::World => "world",
            ParameterType::Coordinate => "coordinate",
            ParameterType::Empire => "empire",
            ParameterType::ShipClass => "shipclass",
            ParameterType::Number => "number",
            ParameterType::Identifier => "identifier",
            ParameterType::Storm => "storm",
            ParameterType::Portal => "portal",
            ParameterType::Count => "count",
            ParameterType::List => "list",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order command definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Canonical uppercase keyword, unique within a catalogue
    pub name: String,

    /// What the order does
    #[serde(default)]
    pub description: String,

    /// Single-line grammar, e.g. `BUILD <world> <count> <shipclass>`
    pub syntax: String,

    /// Parameters in grammar order
    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,

    /// Example order lines
    #[serde(default)]
    pub examples: Vec<String>,

    pub category: CommandCategory,
}

/// A parameter accepted by an order command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,

    #[serde(rename = "type")]
    pub param_type: ParameterType,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub description: String,

    /// Closed set of accepted values, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_values: Option<Vec<String>>,

    /// Free-form format hint, e.g. `x,y`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl CommandDefinition {
    /// Create a new command definition
    pub fn new(
        name: impl Into<String>,
        category: CommandCategory,
        syntax: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            syntax: syntax.into(),
            parameters: Vec::new(),
            examples: Vec::new(),
            category,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a parameter
    pub fn with_parameter(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add an example order line
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Number of required parameters
    pub fn required_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.required).count()
    }
}

impl ParameterDefinition {
    /// Create a new optional parameter
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            description: String::new(),
            valid_values: None,
            format: None,
        }
    }

    /// Create a new required parameter
    pub fn required(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self::new(name, param_type).with_required(true)
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_valid_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}
