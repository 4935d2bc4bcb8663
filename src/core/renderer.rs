//! Renderer module - Placeholder substitution
//!
//! A placeholder is the literal text `open + name + close`, `%%NAME%%` with the
//! default [`Delimiters`]. Matching is plain substring search; delimiters and
//! names are never interpreted as patterns.
//!
//! # Example
//! ```
//! use stencil::core::{TemplateRenderer, Variables};
//!
//! let vars = Variables::from_pairs([("BASE_IMAGE", "alpine:3.18"), ("MSG", "hi")]).unwrap();
//! let renderer = TemplateRenderer::builder()
//!     .template("FROM %%BASE_IMAGE%%\nRUN echo %%MSG%%")
//!     .variables(vars)
//!     .build();
//!
//! assert_eq!(renderer.process().unwrap(), "FROM alpine:3.18\nRUN echo hi");
//! ```

use indexmap::IndexSet;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use super::config;
use super::error::{Result, TemplateError};
use super::store::{FsStore, TextStore};
use super::variables::{Variables, is_valid_name};

/// Opening and closing placeholder markers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    open: String,
    close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(TemplateError::invalid(
                "placeholder delimiters must be non-empty strings",
            ));
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> &str {
        &self.open
    }

    pub fn close(&self) -> &str {
        &self.close
    }

    /// Literal placeholder token for `name`
    pub fn token(&self, name: &str) -> String {
        let mut token = String::with_capacity(self.open.len() + name.len() + self.close.len());
        token.push_str(&self.open);
        token.push_str(name);
        token.push_str(&self.close);
        token
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            open: config::delimiters::OPEN.to_string(),
            close: config::delimiters::CLOSE.to_string(),
        }
    }
}

/// How variables are applied to the template text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Substitution {
    /// One global replace per variable, in insertion order, each over the
    /// output of the previous one. A value that contains the token of a
    /// variable processed later gets replaced by that later pass.
    #[default]
    Sequential,

    /// A single left-to-right scan of the original text. Replacement values
    /// are never looked at again.
    ///
    /// Where tokens overlap the leftmost one wins, which can differ from
    /// `Sequential`: with `B = 2` bound before `A = 1`, `%%A%%B%%` gives
    /// `1B%%` here but `%%A2` sequentially, because `B` is replaced first.
    SinglePass,
}

/// Renders a template by replacing placeholders with variable values
///
/// The renderer can be reconfigured and processed any number of times;
/// [`process`](Self::process) only reads the current configuration.
#[derive(Debug, Clone)]
pub struct TemplateRenderer<S = FsStore> {
    template: Option<String>,
    template_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    variables: Variables,
    delimiters: Delimiters,
    substitution: Substitution,
    store: S,
}

impl TemplateRenderer<FsStore> {
    /// Renderer with no template, no variables and the default delimiters
    pub fn new() -> Self {
        Self::with_store(FsStore)
    }

    pub fn with_delimiters(delimiters: Delimiters) -> Self {
        let mut renderer = Self::new();
        renderer.delimiters = delimiters;
        renderer
    }

    pub fn builder() -> RendererBuilder<NoSource, FsStore> {
        RendererBuilder {
            renderer: Self::new(),
            _state: PhantomData,
        }
    }
}

impl Default for TemplateRenderer<FsStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextStore> TemplateRenderer<S> {
    /// Renderer that reads and writes files through `store`
    pub fn with_store(store: S) -> Self {
        Self {
            template: None,
            template_file: None,
            output_file: None,
            variables: Variables::new(),
            delimiters: Delimiters::default(),
            substitution: Substitution::default(),
            store,
        }
    }

    /// Set the template file path; existence is checked at render time
    pub fn set_template_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(TemplateError::invalid(
                "template file path must be a non-empty string",
            ));
        }
        self.template_file = Some(path.to_path_buf());
        Ok(self)
    }

    /// Set the inline template; an empty string is a valid template
    pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.template = Some(template.into());
        self
    }

    pub fn set_output_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(TemplateError::invalid(
                "output file path must be a non-empty string",
            ));
        }
        self.output_file = Some(path.to_path_buf());
        Ok(self)
    }

    /// Replace the whole variable mapping
    pub fn set_variables(&mut self, variables: Variables) -> &mut Self {
        self.variables = variables;
        self
    }

    pub fn set_substitution(&mut self, substitution: Substitution) -> &mut Self {
        self.substitution = substitution;
        self
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn template_file(&self) -> Option<&Path> {
        self.template_file.as_deref()
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn substitution(&self) -> Substitution {
        self.substitution
    }

    /// Resolve the template, substitute variables and write the output file
    /// if one is set. The rendered text is returned either way.
    pub fn process(&self) -> Result<String> {
        let rendered = self.render()?;
        self.write_output(&rendered)?;
        Ok(rendered)
    }

    /// Resolve the template and substitute variables, without writing
    pub fn render(&self) -> Result<String> {
        let template = self.load_template()?;
        Ok(self.render_str(&template))
    }

    /// Write `rendered` to the output file, if one is set
    pub fn write_output(&self, rendered: &str) -> Result<()> {
        if let Some(path) = &self.output_file {
            self.store
                .write_text(path, rendered)
                .map_err(|e| TemplateError::io(path, e))?;
        }
        Ok(())
    }

    /// Substitute variables into `template` without any I/O
    pub fn render_str(&self, template: &str) -> String {
        match self.substitution {
            Substitution::Sequential => {
                substitute_sequential(template, &self.variables, &self.delimiters)
            }
            Substitution::SinglePass => {
                substitute_single_pass(template, &self.variables, &self.delimiters)
            }
        }
    }

    /// Template text as `process` would see it; the file path wins over the
    /// inline template
    pub fn load_template(&self) -> Result<String> {
        if let Some(path) = &self.template_file {
            if !self.store.exists(path) {
                return Err(TemplateError::TemplateNotFound(path.clone()));
            }
            return self
                .store
                .read_text(path)
                .map_err(|e| TemplateError::io(path, e));
        }

        self.template
            .clone()
            .ok_or(TemplateError::NoTemplateConfigured)
    }

    fn replace_store<T: TextStore>(self, store: T) -> TemplateRenderer<T> {
        TemplateRenderer {
            template: self.template,
            template_file: self.template_file,
            output_file: self.output_file,
            variables: self.variables,
            delimiters: self.delimiters,
            substitution: self.substitution,
            store,
        }
    }
}

fn substitute_sequential(template: &str, variables: &Variables, delimiters: &Delimiters) -> String {
    let mut text = template.to_string();
    for (name, value) in variables.iter() {
        let token = delimiters.token(name);
        if text.contains(&token) {
            text = text.replace(&token, &value.to_string());
        }
    }
    text
}

fn substitute_single_pass(
    template: &str,
    variables: &Variables,
    delimiters: &Delimiters,
) -> String {
    if variables.is_empty() {
        return template.to_string();
    }

    let tokens: Vec<(String, String)> = variables
        .iter()
        .map(|(name, value)| (delimiters.token(name), value.to_string()))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find(delimiters.open()) {
        let candidate = &rest[idx..];
        match tokens.iter().find(|(token, _)| candidate.starts_with(token.as_str())) {
            Some((token, value)) => {
                out.push_str(&rest[..idx]);
                out.push_str(value);
                rest = &candidate[token.len()..];
            }
            None => {
                // step over one char so overlapping markers are still tried
                let step = candidate.chars().next().map_or(1, char::len_utf8);
                out.push_str(&rest[..idx + step]);
                rest = &rest[idx + step..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Names of the placeholders found in `text`, in order of first appearance
///
/// Every occurrence of the opening marker is tried, so with `%%`/`%%` both
/// `A` and `B` are reported for `%%A%%B%%`, matching what substitution can
/// replace.
pub fn placeholders(text: &str, delimiters: &Delimiters) -> Vec<String> {
    let mut names = IndexSet::new();
    let mut rest = text;

    while let Some(idx) = rest.find(delimiters.open()) {
        let after = &rest[idx + delimiters.open().len()..];
        if let Some(end) = after.find(delimiters.close()) {
            let name = &after[..end];
            if is_valid_name(name) {
                names.insert(name.to_string());
            }
        }

        let step = rest[idx..].chars().next().map_or(1, char::len_utf8);
        rest = &rest[idx + step..];
    }

    names.into_iter().collect()
}

/// Builder state: no template source yet
#[derive(Debug)]
pub struct NoSource;

/// Builder state: a template or template file has been given
#[derive(Debug)]
pub struct HasSource;

/// Step-by-step construction of a [`TemplateRenderer`]
///
/// `build` only exists once a template source is set, so a renderer that
/// would fail with [`TemplateError::NoTemplateConfigured`] cannot come out of
/// the builder.
#[derive(Debug)]
pub struct RendererBuilder<State, S = FsStore> {
    renderer: TemplateRenderer<S>,
    _state: PhantomData<State>,
}

impl<State, S: TextStore> RendererBuilder<State, S> {
    pub fn template(mut self, template: impl Into<String>) -> RendererBuilder<HasSource, S> {
        self.renderer.set_template(template);
        self.into_state()
    }

    pub fn template_file(
        mut self,
        path: impl AsRef<Path>,
    ) -> Result<RendererBuilder<HasSource, S>> {
        self.renderer.set_template_file(path)?;
        Ok(self.into_state())
    }

    pub fn output_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.renderer.set_output_file(path)?;
        Ok(self)
    }

    pub fn variables(mut self, variables: Variables) -> Self {
        self.renderer.set_variables(variables);
        self
    }

    pub fn substitution(mut self, substitution: Substitution) -> Self {
        self.renderer.set_substitution(substitution);
        self
    }

    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.renderer.delimiters = delimiters;
        self
    }

    pub fn store<T: TextStore>(self, store: T) -> RendererBuilder<State, T> {
        RendererBuilder {
            renderer: self.renderer.replace_store(store),
            _state: PhantomData,
        }
    }

    fn into_state<Next>(self) -> RendererBuilder<Next, S> {
        RendererBuilder {
            renderer: self.renderer,
            _state: PhantomData,
        }
    }
}

impl<S: TextStore> RendererBuilder<HasSource, S> {
    pub fn build(self) -> TemplateRenderer<S> {
        self.renderer
    }
}
