//! Model rendering: project a [`NodeModel`] through a handlebars template
//! and write the result to a file.

use handlebars::{no_escape, Handlebars};
use rosmodel_core::{InterfaceRecord, ModelError, NodeModel, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const TEMPLATE_NAME: &str = "node_model";
const TEMPLATE_FILE: &str = "node_model.hbs";
const BUILTIN_TEMPLATE: &str = include_str!("../templates/node_model.hbs");

/// Context handed to the template: the model's sequences plus one
/// non-empty flag per sequence.
#[derive(Serialize)]
struct ModelContext<'a> {
    node_name: &'a str,
    subscribers: &'a [InterfaceRecord],
    publishers: &'a [InterfaceRecord],
    service_servers: &'a [InterfaceRecord],
    service_clients: &'a [InterfaceRecord],
    action_servers: &'a [InterfaceRecord],
    action_clients: &'a [InterfaceRecord],
    parameters: &'a [InterfaceRecord],
    has_subscribers: bool,
    has_publishers: bool,
    has_service_servers: bool,
    has_service_clients: bool,
    has_action_servers: bool,
    has_action_clients: bool,
    has_parameters: bool,
}

impl<'a> ModelContext<'a> {
    fn new(model: &'a NodeModel) -> Self {
        Self {
            node_name: &model.node_name,
            subscribers: &model.subscribers,
            publishers: &model.publishers,
            service_servers: &model.service_servers,
            service_clients: &model.service_clients,
            action_servers: &model.action_servers,
            action_clients: &model.action_clients,
            parameters: &model.parameters,
            has_subscribers: !model.subscribers.is_empty(),
            has_publishers: !model.publishers.is_empty(),
            has_service_servers: !model.service_servers.is_empty(),
            has_service_clients: !model.service_clients.is_empty(),
            has_action_servers: !model.action_servers.is_empty(),
            has_action_clients: !model.action_clients.is_empty(),
            has_parameters: !model.parameters.is_empty(),
        }
    }
}

/// Renders node models through the `node_model` template.
///
/// The template location is explicit configuration: a directory containing
/// `node_model.hbs`, or the built-in template compiled into the binary.
#[derive(Debug)]
pub struct ModelRenderer {
    registry: Handlebars<'static>,
}

impl ModelRenderer {
    pub fn new(template_dir: Option<&Path>) -> Result<Self> {
        let mut registry = Handlebars::new();
        // Output is plain text, not HTML.
        registry.register_escape_fn(no_escape);
        match template_dir {
            Some(dir) => registry
                .register_template_file(TEMPLATE_NAME, dir.join(TEMPLATE_FILE))
                .map_err(|e| ModelError::Render(e.to_string()))?,
            None => registry
                .register_template_string(TEMPLATE_NAME, BUILTIN_TEMPLATE)
                .map_err(|e| ModelError::Render(e.to_string()))?,
        }
        Ok(Self { registry })
    }

    /// Render the model to text.
    pub fn render(&self, model: &NodeModel) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, &ModelContext::new(model))
            .map_err(|e| ModelError::Render(e.to_string()))
    }

    /// Render and persist: create the file if absent, truncate and
    /// overwrite if present.
    pub fn write(&self, model: &NodeModel, output: &Path) -> Result<()> {
        let contents = self.render(model)?;
        fs::write(output, contents)?;
        Ok(())
    }
}
