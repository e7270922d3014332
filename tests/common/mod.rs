#![allow(dead_code)]

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REGISTER_PATH: &str = "/print_all_advocates.php";

pub fn header_row() -> String {
    let titles = [
        "ID", "Name", "Firm", "Address", "Email", "Phone", "Plot", "Enrolled", "Renewed",
        "Certificate", "Status",
    ];
    let ths: String = titles.iter().map(|t| format!("<th>{}</th>", t)).collect();
    format!("<tr>{}</tr>", ths)
}

pub fn data_row(cells: &[&str]) -> String {
    let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
    format!("<tr>{}</tr>", tds)
}

pub fn jane_doe_row() -> String {
    data_row(&[
        " 1234 ",
        "  Jane Doe  ",
        "Doe &amp; Partners",
        "Plot 5, Kampala",
        "jane@example.com",
        "+256700000000",
        "5",
        "2001-01-01",
        "2024-01-01",
        "C-001",
        "\n  Active\n",
    ])
}

pub fn short_row() -> String {
    data_row(&["9", "Nine Cells", "Firm", "Addr", "e@x", "0", "1", "2020", "2021"])
}

/// One header row, one full data row and one 9-cell row
pub fn register_page() -> String {
    page(&[header_row(), jane_doe_row(), short_row()])
}

pub fn page(rows: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Advocates</title></head><body><table>{}</table></body></html>",
        rows.concat()
    )
}

/// A mock register server on its own runtime.
///
/// The blocking client must not run inside a tokio context, so tests keep
/// the runtime here and call the pipeline from the plain test thread.
pub struct RegisterServer {
    pub server: MockServer,
    pub runtime: tokio::runtime::Runtime,
}

impl RegisterServer {
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with(ResponseTemplate::new(status).set_body_string(body), None)
    }

    /// Serve `template`; when `user_agent` is set, only requests carrying
    /// that User-Agent match (others get wiremock's default 404).
    pub fn start_with(template: ResponseTemplate, user_agent: Option<&str>) -> Self {
        let runtime = tokio::runtime::Runtime::new().expect("build tokio runtime");
        let server = runtime.block_on(MockServer::start());
        let mut mock = Mock::given(method("GET")).and(path(REGISTER_PATH));
        if let Some(agent) = user_agent {
            mock = mock.and(header("user-agent", agent));
        }
        runtime.block_on(mock.respond_with(template).expect(1).mount(&server));
        Self { server, runtime }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.server.uri(), REGISTER_PATH)
    }

    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// Client that ignores proxy settings from the environment
pub fn direct_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("build reqwest client")
}
