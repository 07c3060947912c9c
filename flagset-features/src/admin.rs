//! HTTP admin interface for a [`FlagSet`]
//!
//! Mount the handler under any prefix, e.g. `/features/`:
//!
//! - `GET /features/` lists all flags (HTML when `Accept` mentions `html`)
//! - `GET /features/{name}` shows one flag
//! - `POST /features/{name}?enabled=true` updates it, from the query string
//!   or an url-encoded form body

use crate::config::AdminConfig;
use crate::error::{FeatureError, FeatureResult, ParamError};
use crate::flag::Flag;
use crate::params::{self, ENABLED};
use crate::set::FlagSet;
use crate::template::{INDEX_TEMPLATE, PLAIN_TEMPLATE, TemplateEngine};
use async_trait::async_trait;
use flagset_core::{
    Error, FORM_URLENCODED, FormValues, HttpMethod, HttpRequest, HttpResponse, RequestHandler,
    decode_path,
};
use flagset_log::{debug, info, warn};
use serde_json::json;
use std::sync::Arc;

/// Request handler that lists, shows and updates the flags of a set
#[derive(Debug)]
pub struct FlagAdmin {
    set: Arc<FlagSet>,
    config: AdminConfig,
    engine: TemplateEngine,
}

impl FlagAdmin {
    pub fn new(set: Arc<FlagSet>) -> FeatureResult<Self> {
        Self::with_config(set, AdminConfig::default())
    }

    pub fn with_config(set: Arc<FlagSet>, config: AdminConfig) -> FeatureResult<Self> {
        Ok(Self::with_engine(set, config, TemplateEngine::new()?))
    }

    /// Use a prepared engine, e.g. one with templates for custom flag types
    pub fn with_engine(set: Arc<FlagSet>, config: AdminConfig, engine: TemplateEngine) -> Self {
        Self {
            set,
            config,
            engine,
        }
    }

    pub fn flag_set(&self) -> &Arc<FlagSet> {
        &self.set
    }

    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// Handle a request, turning errors into plain-text error responses
    pub fn serve(&self, request: &HttpRequest) -> HttpResponse {
        self.dispatch(request).unwrap_or_else(HttpResponse::from)
    }

    /// Route a request to the index or to a single flag.
    ///
    /// The path is percent-decoded first. Everything after its last `/` is
    /// then the flag name; an empty name, or no `/` at all, selects the
    /// index.
    pub fn dispatch(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let path = decode_path(request.path_only())?;
        debug!("{} {}", request.method, path);

        match path.rfind('/') {
            Some(slash) if slash + 1 < path.len() => {
                self.handle_flag(request, &path[slash + 1..])
            }
            _ => self.handle_index(request),
        }
    }

    fn handle_index(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        if request.http_method() != Some(HttpMethod::GET) {
            return Err(method_not_allowed());
        }

        let flags = self.set.flags();

        if request.accepts("html") {
            Ok(HttpResponse::html(self.render_index(&flags)?))
        } else {
            let mut body = String::from("Flags:\n\n");
            for flag in &flags {
                body.push_str(&describe(flag.as_ref()));
                body.push('\n');
            }
            Ok(HttpResponse::text(body))
        }
    }

    fn render_index(&self, flags: &[Arc<dyn Flag>]) -> FeatureResult<String> {
        let items = flags
            .iter()
            .map(|flag| match flag.as_renderable() {
                Some(renderable) => renderable.render_html(&self.engine),
                None => self.engine.render(
                    PLAIN_TEMPLATE,
                    &json!({
                        "name": flag.name(),
                        "enabled": flag.is_enabled(),
                    }),
                ),
            })
            .collect::<FeatureResult<Vec<_>>>()?;

        self.engine.render(
            INDEX_TEMPLATE,
            &json!({
                "title": self.config.title,
                "items": items,
            }),
        )
    }

    fn handle_flag(&self, request: &HttpRequest, name: &str) -> Result<HttpResponse, Error> {
        let flag = self
            .set
            .get(name)
            .ok_or_else(|| Error::NotFound("no such feature".to_string()))?;

        match request.http_method() {
            Some(HttpMethod::GET) => Ok(HttpResponse::text(describe(flag.as_ref()))),
            Some(HttpMethod::POST) => self.update(request, flag.as_ref()),
            _ => Err(method_not_allowed()),
        }
    }

    fn update(&self, request: &HttpRequest, flag: &dyn Flag) -> Result<HttpResponse, Error> {
        let is_form = request.media_type().as_deref() == Some(FORM_URLENCODED);

        let mut params = parse_params(request, is_form).map_err(|err| {
            warn!("parsing parameters for {:?}: {}", flag.name(), err);
            Error::BadRequest("invalid parameters".to_string())
        })?;

        // browsers leave unchecked checkboxes out of the form entirely
        if is_form && params::is_blank(params.get(ENABLED)) {
            params.set(ENABLED, "false");
        }

        apply(flag, &params).map_err(|err| {
            warn!("rejected update of {:?}: {}", flag.name(), err);
            Error::from(FeatureError::from(err))
        })?;

        let body = describe(flag);
        info!("updated {}", body);

        match request.header("Referer") {
            Some(referer) if self.config.redirect_to_referer && !referer.is_empty() => {
                Ok(HttpResponse::temporary_redirect(referer)
                    .with_header("Content-Type", "text/plain; charset=utf-8")
                    .with_body(body.into_bytes()))
            }
            _ => Ok(HttpResponse::text(body)),
        }
    }
}

#[async_trait]
impl RequestHandler for FlagAdmin {
    async fn handle(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.dispatch(&request)
    }
}

/// Update a flag through its own rules when it has them, otherwise
/// require an explicit `enabled`.
fn apply(flag: &dyn Flag, params: &FormValues) -> Result<(), ParamError> {
    match flag.as_settable() {
        Some(settable) => settable.set_from(params),
        None => {
            let enabled = params::require_enabled(params.get(ENABLED))?;
            flag.set(enabled);
            Ok(())
        }
    }
}

/// Form body values first, then the query string.
fn parse_params(request: &HttpRequest, is_form: bool) -> Result<FormValues, Error> {
    let mut params = if is_form {
        FormValues::parse_bytes(&request.body)?
    } else {
        FormValues::new()
    };

    if let Some(query) = request.query_string() {
        params.extend(FormValues::parse(query)?);
    }

    Ok(params)
}

/// The flag's display form, or `name: enabled`.
fn describe(flag: &dyn Flag) -> String {
    match flag.as_display() {
        Some(display) => display.to_string(),
        None => format!("{}: {}", flag.name(), flag.is_enabled()),
    }
}

fn method_not_allowed() -> Error {
    Error::MethodNotAllowed("Method Not Allowed".to_string())
}
