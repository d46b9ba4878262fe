//! HTML rendering of the form page.

use crate::query::result_query;
use countrymap_core::prelude::*;
use countrymap_core::text::escape_html;

pub const TITLE: &str = "Geocoding App";

/// What goes under the form.
#[derive(Clone, Copy)]
pub enum Body<'a> {
    Outcome(&'a FormOutcome),
    /// The submission failed (API unreachable, malformed payload).
    Error(&'a str),
}

/// The whole page: form on top, result below.
pub fn render(continents: &[&str], selected_continent: &str, selection: &Selection, body: Body<'_>) -> String {
    let rendered = match body {
        Body::Outcome(outcome) => outcome.rendered(),
        Body::Error(_) => None,
    };

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>{title}</title>
{leaflet}
<style>
  body {{ font-family: sans-serif; max-width: 960px; margin: 2rem auto; }}
  .error {{ color: #8a1c1c; background: #fde8e8; padding: .5rem 1rem; }}
  .success {{ color: #1c5e2a; background: #e6f6ea; padding: .5rem 1rem; }}
  label {{ display: block; margin-top: 1rem; }}
</style>
</head>
<body>
<h1>{title}</h1>
"#,
        title = TITLE,
        leaflet = MapView::leaflet_head(),
    ));

    html.push_str(&form(continents, selected_continent, selection, rendered));

    match body {
        Body::Error(message) => {
            html.push_str(&format!(r#"<p class="error">{}</p>"#, escape_html(message)));
        }
        Body::Outcome(FormOutcome::Idle { .. }) => {}
        Body::Outcome(FormOutcome::NoResult { message, .. }) => {
            html.push_str(&format!(r#"<p class="error">{}</p>"#, escape_html(message)));
        }
        Body::Outcome(FormOutcome::Rendered(r)) => html.push_str(&result(r)),
    }

    html.push_str("\n</body>\n</html>\n");
    html
}

fn form(continents: &[&str], selected: &str, selection: &Selection, rendered: Option<&Rendered>) -> String {
    let options: String = continents
        .iter()
        .map(|c| option(c, *c == selected))
        .collect();

    let mut html = format!(
        r#"<form method="get" action="/">
<input type="hidden" name="prev_continent" value="{selected}" />
<input type="hidden" name="prev_country" value="{country}" />
<label>Select a continent
<select name="continent" onchange="this.form.submit()">
{options}</select>
</label>
<label>Enter a country name
<input type="text" name="country" value="{country}" />
</label>
"#,
        selected = escape_html(selected),
        country = escape_html(&selection.country),
    );

    if let Some(r) = rendered.filter(|r| !r.neighbor_options.is_empty()) {
        let chosen = r.neighbor.as_deref().unwrap_or(NO_NEIGHBOR);
        let options: String = r
            .neighbor_options
            .iter()
            .map(|n| option(n, n == chosen))
            .collect();
        html.push_str(&format!(
            r#"<label>Select a neighbor
<select name="neighbor" onchange="this.form.submit()">
{options}</select>
</label>
"#
        ));
    }

    html.push_str("<p><button type=\"submit\">Search</button></p>\n</form>\n");
    html
}

fn option(value: &str, selected: bool) -> String {
    let value = escape_html(value);
    let selected = if selected { " selected" } else { "" };
    format!("<option value=\"{value}\"{selected}>{value}</option>\n")
}

fn result(r: &Rendered) -> String {
    let mut html = format!(
        r#"<p class="success">{}</p>
<h2>Country Details</h2>
"#,
        escape_html(&r.success_line())
    );

    match &r.details {
        DetailsLookup::Found(d) => {
            let population = d.population.to_string();
            let languages = d.languages.join(", ");
            let currencies = d.currencies.join(", ");
            html.push_str("<dl>\n");
            for (label, value) in [
                ("Name", d.name.as_str()),
                ("Capital", d.capital.as_str()),
                ("Population", population.as_str()),
                ("Region", d.region.as_str()),
                ("Subregion", d.subregion.as_str()),
                ("Languages", languages.as_str()),
                ("Currencies", currencies.as_str()),
            ] {
                html.push_str(&format!(
                    "<dt>{label}:</dt><dd>{}</dd>\n",
                    escape_html(value)
                ));
            }
            html.push_str("</dl>\n");
        }
        DetailsLookup::NotFound(message) => {
            html.push_str(&format!("<p>{}</p>\n", escape_html(message)));
        }
    }

    html.push_str(&format!("<p>{}</p>\n", escape_html(&r.neighbor_line())));
    html.push_str(&r.map.leaflet_snippet("map", &r.feature_collection()));

    let query = escape_html(&result_query(r));
    html.push_str(&format!(
        r#"
<p>
<a href="/download?{query}" download="{file}">Download GeoJSON</a>
&middot; <a href="/map?{query}">Open map</a>
</p>
"#,
        file = escape_html(&r.export.file_name),
    ));
    html
}
