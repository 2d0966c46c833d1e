//! Template engine for generated text documents.

use crate::error::{ExportError, Result};
use blueprint_core::quote;
use convert_case::{Case, Casing};
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the README template.
pub const README: &str = "readme";
/// Name of the theme constants template.
pub const THEME: &str = "theme";
/// Name of the build-instructions template.
pub const BUILD_INSTRUCTIONS: &str = "build-instructions";

const README_TEMPLATE: &str = r#"# {{name}}

{{description}}

## Getting Started

1. Install dependencies:
   ```bash
   npm install
   ```

2. Start the development server:
   ```bash
   npm start
   ```

3. Run on device:
   - **Android**: `npm run android`
   - **iOS**: `npm run ios`
   - **Web**: `npm run web`

## Building for Production

### Android APK
```bash
expo build:android
```

### iOS App
```bash
expo build:ios
```

## App Configuration

- **Package Name**: {{package_name}}
- **Version**: {{version}}
- **Orientation**: {{orientation}}
- **Min SDK Version**: {{min_sdk_version}}
- **Target SDK Version**: {{target_sdk_version}}

## Theme

- **Primary Color**: {{theme.primaryColor}}
- **Secondary Color**: {{theme.secondaryColor}}
- **Background Color**: {{theme.backgroundColor}}
- **Text Color**: {{theme.textColor}}

## Permissions

{{permission_list}}

---

Generated with Blueprint
"#;

const BUILD_INSTRUCTIONS_TEMPLATE: &str = r#"# Build Instructions for {{name}}

Platform: {{platform}}
Build type: {{upper build_type}}

## Prerequisites
{{prerequisites}}

## Build Steps
{{steps}}
{{release}}"#;

const THEME_TEMPLATE: &str = r#"export const theme = {
  primaryColor: {{json theme.primaryColor}},
  secondaryColor: {{json theme.secondaryColor}},
  backgroundColor: {{json theme.backgroundColor}},
  textColor: {{json theme.textColor}},
};

export const spacing = {
  xs: 4,
  sm: 8,
  md: 16,
  lg: 24,
  xl: 32,
};
"#;

/// Template engine using Handlebars.
///
/// HTML escaping is off: every template renders source code or markdown.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with the built-in project templates registered.
    pub fn new() -> Result<Self> {
        let mut engine = Self::empty();
        engine.register_template(README, README_TEMPLATE)?;
        engine.register_template(THEME, THEME_TEMPLATE)?;
        engine.register_template(BUILD_INSTRUCTIONS, BUILD_INSTRUCTIONS_TEMPLATE)?;
        Ok(engine)
    }

    /// Create an engine with helpers but no templates.
    pub fn empty() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(ExportError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(ExportError::TemplateError)
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(ExportError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        Self::register_string_helper(handlebars, "json", quote);
        Self::register_string_helper(handlebars, "upper", str::to_uppercase);
        Self::register_string_helper(handlebars, "lower", str::to_lowercase);
        Self::register_string_helper(handlebars, "pascal_case", pascal_case);
        Self::register_string_helper(handlebars, "camel_case", camel_case);
        Self::register_string_helper(handlebars, "snake_case", snake_case);
        Self::register_string_helper(handlebars, "kebab_case", kebab_case);

        // {{join items ", "}}
        handlebars.register_helper(
            "join",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let separator = h
                        .param(1)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or(", ");
                    if let Some(items) = h.param(0).and_then(|v| v.value().as_array()) {
                        let parts: Vec<String> = items
                            .iter()
                            .map(|item| match item.as_str() {
                                Some(s) => s.to_string(),
                                None => item.to_string(),
                            })
                            .collect();
                        out.write(&parts.join(separator))?;
                    }
                    Ok(())
                },
            ),
        );

        // {{indent text 4}}; blank lines stay empty
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let text = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let width = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(2) as usize;
                    out.write(&indent(text, width))?;
                    Ok(())
                },
            ),
        );
    }

    /// Register a helper that maps its first string argument.
    fn register_string_helper(
        handlebars: &mut Handlebars,
        name: &'static str,
        convert: fn(&str) -> String,
    ) {
        handlebars.register_helper(
            name,
            Box::new(
                move |h: &handlebars::Helper,
                      _r: &Handlebars,
                      _ctx: &handlebars::Context,
                      _rc: &mut handlebars::RenderContext,
                      out: &mut dyn handlebars::Output| {
                    let param = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&convert(param))?;
                    Ok(())
                },
            ),
        );
    }
}

fn pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

fn camel_case(s: &str) -> String {
    s.to_case(Case::Camel)
}

fn snake_case(s: &str) -> String {
    s.to_case(Case::Snake)
}

fn kebab_case(s: &str) -> String {
    s.to_case(Case::Kebab)
}

fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
