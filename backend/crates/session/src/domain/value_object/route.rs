//! Client Routes
//!
//! The front end's navigation table: two public pages, one landing page per
//! role and a fixed set of sections under each landing page. Anything else
//! redirects to the login page. Static segments match regardless of ASCII
//! case; ids are kept as given.

use derive_more::Display;
use serde::Serialize;

use super::role::Role;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTRATION_PATH: &str = "/cadastro-paciente";
const DASHBOARD_SEGMENT: &str = "dashboard";

/// A client-side navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Route(String);

impl Route {
    /// `/dashboard/<role>`
    pub fn landing(role: Role) -> Self {
        Self(format!("/{DASHBOARD_SEGMENT}/{}", role.code()))
    }

    pub fn login() -> Self {
        Self(LOGIN_PATH.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A page below a role's landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub role: Role,
    pub slug: &'static str,
    /// Section is addressed as `<slug>/<id>`
    pub takes_id: bool,
}

impl Section {
    const fn new(role: Role, slug: &'static str) -> Self {
        Self {
            role,
            slug,
            takes_id: false,
        }
    }

    const fn with_id(role: Role, slug: &'static str) -> Self {
        Self {
            role,
            slug,
            takes_id: true,
        }
    }

    /// Path pattern, `:id` marks the id segment.
    pub fn pattern(&self) -> String {
        let base = format!("/{DASHBOARD_SEGMENT}/{}/{}", self.role.code(), self.slug);
        if self.takes_id {
            format!("{base}/:id")
        } else {
            base
        }
    }
}

static SECTIONS: [Section; 13] = [
    Section::new(Role::Patient, "consultas"),
    Section::new(Role::Patient, "agendamento"),
    Section::new(Role::Patient, "historico"),
    Section::new(Role::Patient, "teleconsulta"),
    Section::new(Role::Patient, "notificacoes"),
    Section::new(Role::Professional, "agenda"),
    Section::new(Role::Professional, "pacientes"),
    Section::new(Role::Professional, "prontuarios"),
    Section::with_id(Role::Professional, "prontuario"),
    Section::with_id(Role::Professional, "receita"),
    Section::new(Role::Admin, "cadastros"),
    Section::new(Role::Admin, "internacoes"),
    Section::new(Role::Admin, "relatorios"),
];

/// Sections reachable from a role's landing page, in menu order.
pub fn sections_of(role: Role) -> impl Iterator<Item = &'static Section> {
    SECTIONS.iter().filter(move |s| s.role == role)
}

/// Outcome of matching a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RouteMatch {
    Login,
    Registration,
    Landing {
        role: Role,
    },
    Section {
        role: Role,
        section: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
    /// Unknown path; the client redirects to the login page
    Fallback,
}

impl RouteMatch {
    /// Role whose dashboard owns the page, if any.
    pub fn role(&self) -> Option<Role> {
        match self {
            RouteMatch::Landing { role } | RouteMatch::Section { role, .. } => Some(*role),
            RouteMatch::Login | RouteMatch::Registration | RouteMatch::Fallback => None,
        }
    }

    /// Where the client ends up. Only `Fallback` differs from the requested path.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            RouteMatch::Fallback => Some(Route::login()),
            _ => None,
        }
    }
}

/// Match a client path. A single trailing `/` is ignored.
pub fn resolve(path: &str) -> RouteMatch {
    let path = match path.strip_suffix('/') {
        Some(p) if !p.is_empty() => p,
        _ => path,
    };

    if path.eq_ignore_ascii_case(LOGIN_PATH) {
        return RouteMatch::Login;
    }
    if path.eq_ignore_ascii_case(REGISTRATION_PATH) {
        return RouteMatch::Registration;
    }

    // Absolute paths split into an empty first segment
    let mut segments = path.split('/');
    if segments.next() != Some("") {
        return RouteMatch::Fallback;
    }
    if !segments
        .next()
        .is_some_and(|s| s.eq_ignore_ascii_case(DASHBOARD_SEGMENT))
    {
        return RouteMatch::Fallback;
    }

    let Some(role) = segments
        .next()
        .and_then(|code| Role::from_code(&code.to_ascii_lowercase()))
    else {
        return RouteMatch::Fallback;
    };

    let remaining: Vec<&str> = segments.collect();
    match remaining.as_slice() {
        [] => RouteMatch::Landing { role },
        [slug] => match_section(role, slug, None),
        [slug, id] if !id.is_empty() => match_section(role, slug, Some(id)),
        _ => RouteMatch::Fallback,
    }
}

fn match_section(role: Role, slug: &str, id: Option<&str>) -> RouteMatch {
    sections_of(role)
        .find(|s| s.slug.eq_ignore_ascii_case(slug) && s.takes_id == id.is_some())
        .map(|s| RouteMatch::Section {
            role,
            section: s.slug,
            id: id.map(str::to_string),
        })
        .unwrap_or(RouteMatch::Fallback)
}
