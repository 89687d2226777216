//! The ordered table of known error signatures.
//!
//! Every entry pairs a pattern with a plain function that turns the named
//! captures of a successful match into an explanation. Patterns are
//! compiled case-insensitively once, on first use.

use super::http::explain_status_text;
use regex::{Captures, Regex, RegexBuilder};

/// Builds an explanation from the captures of a matched signature.
pub type Explainer = fn(&Captures<'_>) -> String;

/// A compiled error signature.
#[derive(Debug, Clone)]
pub struct Signature {
    pattern: &'static str,
    regex: Regex,
    explain: Explainer,
}

impl Signature {
    /// Compile a signature. Matching is always case-insensitive.
    pub fn new(pattern: &'static str, explain: Explainer) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            pattern,
            regex,
            explain,
        })
    }

    /// Pattern text, which doubles as the signature's identity.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// First occurrence only: returns the matched span and its explanation.
    pub fn find(&self, text: &str) -> Option<(String, String)> {
        self.regex.captures(text).map(|caps| {
            let matched = caps.get(0).map_or("", |m| m.as_str()).to_string();
            (matched, (self.explain)(&caps))
        })
    }
}

/// Named capture, or an empty string if the group did not participate.
fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

pub(crate) const SIGNATURE_TABLE: &[(&str, Explainer)] = &[
    // Python
    (
        r"ModuleNotFoundError: No module named '(?P<module>\w+)'",
        |c| {
            let module = group(c, "module");
            format!("Python module '{module}' is not installed. Try: pip install {module}")
        },
    ),
    (
        r"ImportError: cannot import name '(?P<name>\w+)' from '(?P<module>\w+)'",
        |c| {
            format!(
                "Cannot import '{}' from '{}'. Check if it exists or if there's a circular import.",
                group(c, "name"),
                group(c, "module")
            )
        },
    ),
    (
        r"TypeError: (?P<function>\w+)\(\) takes (?P<expected>\d+) positional arguments? but (?P<given>\d+) (?:was|were) given",
        |c| {
            format!(
                "Function '{}' expects {} argument(s) but received {}.",
                group(c, "function"),
                group(c, "expected"),
                group(c, "given")
            )
        },
    ),
    (
        r"AttributeError: '(?P<type>\w+)' object has no attribute '(?P<attribute>\w+)'",
        |c| {
            format!(
                "Object of type '{}' doesn't have attribute '{}'. Check spelling or if the object is the correct type.",
                group(c, "type"),
                group(c, "attribute")
            )
        },
    ),
    (
        r#"KeyError: ['"]?(?P<key>\w+)['"]?"#,
        |c| {
            format!(
                "Dictionary key '{}' not found. Use .get() for safe access or check if key exists.",
                group(c, "key")
            )
        },
    ),
    (r"ValueError: (?P<detail>.+)", |c| {
        format!(
            "Invalid value: {}. Validate input data before processing.",
            group(c, "detail")
        )
    }),
    (
        r#"FileNotFoundError: \[Errno 2\] No such file or directory: ['"](?P<path>.+)['"]"#,
        |c| {
            format!(
                "File not found: '{}'. Check the path exists and has correct permissions.",
                group(c, "path")
            )
        },
    ),
    (
        r#"PermissionError: \[Errno 13\] Permission denied: ['"](?P<path>.+)['"]"#,
        |c| {
            format!(
                "Permission denied for: '{}'. Check file permissions or run with elevated privileges.",
                group(c, "path")
            )
        },
    ),
    // JavaScript / Node
    (r"ReferenceError: (?P<name>\w+) is not defined", |c| {
        format!(
            "Variable '{}' is not defined. Check for typos or ensure it's in scope.",
            group(c, "name")
        )
    }),
    (
        r#"TypeError: Cannot read propert(?:y|ies) ['"]?(?P<property>\w+)['"]? of (?P<target>undefined|null)"#,
        |c| {
            format!(
                "Tried to access '{}' on {}. Add null checks or optional chaining (?.).",
                group(c, "property"),
                group(c, "target")
            )
        },
    ),
    (r"SyntaxError: Unexpected token (?P<token>.+)", |c| {
        format!(
            "Syntax error: unexpected '{}'. Check for missing brackets, quotes, or semicolons.",
            group(c, "token")
        )
    }),
    (
        r#"Error: ENOENT: no such file or directory, (?:open|stat) ['"](?P<path>.+)['"]"#,
        |c| {
            format!(
                "Node.js cannot find file: '{}'. Verify the path exists.",
                group(c, "path")
            )
        },
    ),
    (
        r#"Error: Cannot find module ['"](?P<module>.+)['"]"#,
        |c| {
            let module = group(c, "module");
            let package = module.split('/').next().unwrap_or(module);
            format!("Node module '{module}' not found. Try: npm install {package}")
        },
    ),
    // Database
    (
        r"(?:psycopg2\.)?OperationalError.*connection.*refused",
        |_| {
            "Database connection refused. Check if the database server is running and accessible."
                .to_string()
        },
    ),
    (
        r"(?:sqlite3\.)?IntegrityError.*UNIQUE constraint failed: (?P<table>\w+)\.(?P<column>\w+)",
        |c| {
            format!(
                "Duplicate value in {}.{}. The value must be unique.",
                group(c, "table"),
                group(c, "column")
            )
        },
    ),
    (
        r"(?:mysql\.connector\.)?IntegrityError.*Duplicate entry",
        |_| "Duplicate entry violates unique constraint. Check for existing records.".to_string(),
    ),
    // Network
    (r"ConnectionRefusedError|ECONNREFUSED", |_| {
        "Connection refused. The target service may be down or the port may be wrong.".to_string()
    }),
    (r"TimeoutError|ETIMEDOUT", |_| {
        "Connection timed out. Check network connectivity and service availability.".to_string()
    }),
    // The greedy `.*` means the last three-digit run on the line is taken as
    // the status, so an unrelated number can be misread as a status code.
    // ASCII digits only: `\d` would also accept non-ASCII decimal digits.
    (
        r"(?:requests\.exceptions\.)?HTTPError.*(?P<status>[0-9]{3})",
        |c| explain_status_text(group(c, "status")),
    ),
];

/// Compile the full table, skipping (and logging) any pattern that fails.
pub(crate) fn compile_table(table: &[(&'static str, Explainer)]) -> Vec<Signature> {
    table
        .iter()
        .filter_map(|(pattern, explain)| match Signature::new(pattern, *explain) {
            Ok(signature) => Some(signature),
            Err(e) => {
                log::error!("Skipping invalid signature pattern {pattern:?}: {e}");
                None
            }
        })
        .collect()
}
