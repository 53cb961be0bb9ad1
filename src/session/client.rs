//! Session client
//!
//! Builds requests against the configured origin and reproduces the site's
//! navigation protocol. Navigation that changes server-side state
//! (`login`, `logout`, `switch_account`) takes `&mut self`, so a single
//! session can never have two of them in flight at once.

use std::time::Duration;

use tracing::{debug, info};
use url::Url;

use super::request::{encode_form, Method, Page, Request};
use super::transport::{HttpTransport, Transport};
use crate::config::Settings;
use crate::error::{SaveyError, SaveyResult};
use crate::models::AccountId;

/// Login form endpoint (POST `identity`, `credential`)
pub const LOGIN_PATH: &str = "user/login";
/// Logout endpoint
pub const LOGOUT_PATH: &str = "user/logout";
/// Page listing both accounts and categories
pub const MANAGE_PATH: &str = "manage";
/// Page listing the current account's transactions
pub const DASHBOARD_PATH: &str = "dashboard/";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Path that makes `account_id` the session's current account
pub fn switch_account_path(account_id: AccountId) -> String {
    format!("set-account/{}", account_id)
}

/// Client for one authenticated session
pub struct Client<T: Transport = HttpTransport> {
    transport: T,
    base_url: Url,
    dashboard_url: Url,
    user_agent: String,
}

impl Client<HttpTransport> {
    /// Create a client with a fresh cookie jar from user settings
    pub fn new(settings: &Settings) -> SaveyResult<Self> {
        let transport = HttpTransport::new(Duration::from_secs(settings.timeout_secs))?;
        Self::with_transport(transport, &settings.base_url, &settings.user_agent)
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over any transport
    pub fn with_transport(transport: T, base_url: &str, user_agent: &str) -> SaveyResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let dashboard_url = base_url.join(DASHBOARD_PATH)?;

        Ok(Self {
            transport,
            base_url,
            dashboard_url,
            user_agent: user_agent.to_string(),
        })
    }

    /// The origin all paths are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL a successful login or account switch lands on
    pub fn dashboard_url(&self) -> &Url {
        &self.dashboard_url
    }

    /// Access the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a request for `path` relative to the base URL
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        form: Option<&[(&str, &str)]>,
    ) -> SaveyResult<Request> {
        let url = self.base_url.join(path)?;
        let mut headers = vec![("User-Agent".to_string(), self.user_agent.clone())];

        if method == Method::Post {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
        }

        Ok(Request {
            method,
            url,
            headers,
            body: form.map(encode_form),
        })
    }

    /// Build a GET request
    pub fn get(&self, path: &str) -> SaveyResult<Request> {
        self.new_request(Method::Get, path, None)
    }

    /// Build a form-encoded POST request
    pub fn post(&self, path: &str, form: &[(&str, &str)]) -> SaveyResult<Request> {
        self.new_request(Method::Post, path, Some(form))
    }

    /// Send a request through the session's cookie jar
    pub fn execute(&self, request: Request) -> SaveyResult<Page> {
        self.transport.execute(request)
    }

    /// GET `path` and return the resulting page
    pub fn fetch(&self, path: &str) -> SaveyResult<Page> {
        let request = self.get(path)?;
        self.execute(request)
    }

    /// Log in with the site's login form
    ///
    /// The site returns no error payload; a login only counts as successful
    /// when the redirects end on the dashboard.
    pub fn login(&mut self, username: &str, password: &str) -> SaveyResult<()> {
        let request = self.post(
            LOGIN_PATH,
            &[("identity", username), ("credential", password)],
        )?;
        let page = self.execute(request)?;

        if !page.landed_on(&self.dashboard_url) {
            debug!(landed_on = %page.url, "login did not reach dashboard");
            return Err(SaveyError::AuthenticationFailed);
        }

        info!("logged in");
        Ok(())
    }

    /// Log out of the current session
    pub fn logout(&mut self) -> SaveyResult<()> {
        let page = self.fetch(LOGOUT_PATH)?;

        if !page.landed_on(&self.base_url) {
            debug!(landed_on = %page.url, "logout did not reach site root");
            return Err(SaveyError::LogoutFailed);
        }

        info!("logged out");
        Ok(())
    }

    /// Make `account_id` the session's current account
    ///
    /// Only the server-side effect matters; the response body is dropped.
    /// Pages fetched afterwards reflect this account until the next switch.
    pub fn switch_account(&mut self, account_id: AccountId) -> SaveyResult<()> {
        let page = self.fetch(&switch_account_path(account_id))?;

        if !page.landed_on(&self.dashboard_url) {
            return Err(SaveyError::AccountSwitchFailed {
                account_id,
                landed_on: page.url.to_string(),
            });
        }

        debug!(%account_id, "switched current account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::{client_with, ScriptedTransport, BASE};

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client =
            Client::with_transport(ScriptedTransport::new(), "http://example.com/app", "ua")
                .unwrap();
        assert_eq!(client.base_url().as_str(), "http://example.com/app/");
        assert_eq!(
            client.dashboard_url().as_str(),
            "http://example.com/app/dashboard/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = Client::with_transport(ScriptedTransport::new(), "not a url", "ua");
        assert!(matches!(result, Err(SaveyError::InvalidUrl(_))));
    }

    #[test]
    fn test_get_request_headers() {
        let client = client_with(ScriptedTransport::new());
        let request = client.get(MANAGE_PATH).unwrap();

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.as_str(), "http://www.savey.co/manage");
        assert_eq!(request.header("User-Agent"), Some("savey-test"));
        assert_eq!(request.header("Content-Type"), None);
        assert!(request.body.is_none());
    }

    #[test]
    fn test_post_request_is_form_encoded() {
        let client = client_with(ScriptedTransport::new());
        let request = client.post(LOGIN_PATH, &[("identity", "a b")]).unwrap();

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.body.as_deref(), Some("identity=a+b"));
    }

    #[test]
    fn test_login_success_on_dashboard() {
        let transport = ScriptedTransport::new().respond(&format!("{}dashboard/", BASE), "");
        let mut client = client_with(transport);

        client.login("ana", "secret").unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url.as_str(), "http://www.savey.co/user/login");
        assert_eq!(
            sent[0].form_pairs(),
            vec![
                ("identity".to_string(), "ana".to_string()),
                ("credential".to_string(), "secret".to_string()),
            ]
        );
    }

    #[test]
    fn test_login_failure_ignores_status() {
        // A 200 on the login page is still a failed login.
        let transport = ScriptedTransport::new().respond(&format!("{}user/login", BASE), "");
        let mut client = client_with(transport);

        let err = client.login("ana", "wrong").unwrap_err();
        assert!(matches!(err, SaveyError::AuthenticationFailed));
    }

    #[test]
    fn test_logout_requires_site_root() {
        let transport = ScriptedTransport::new()
            .respond(BASE, "")
            .respond(&format!("{}dashboard/", BASE), "");
        let mut client = client_with(transport);

        client.logout().unwrap();
        assert!(matches!(
            client.logout().unwrap_err(),
            SaveyError::LogoutFailed
        ));
    }

    #[test]
    fn test_switch_account() {
        let transport = ScriptedTransport::new()
            .respond(&format!("{}dashboard/", BASE), "")
            .respond(BASE, "");
        let mut client = client_with(transport);

        client.switch_account(AccountId::new(12)).unwrap();
        let err = client.switch_account(AccountId::new(13)).unwrap_err();

        match err {
            SaveyError::AccountSwitchFailed {
                account_id,
                landed_on,
            } => {
                assert_eq!(account_id, AccountId::new(13));
                assert_eq!(landed_on, BASE);
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let sent = client.transport().requests();
        assert_eq!(sent[0].url.as_str(), "http://www.savey.co/set-account/12");
        assert_eq!(sent[1].url.as_str(), "http://www.savey.co/set-account/13");
    }

    #[test]
    fn test_transport_error_surfaces() {
        let mut client = client_with(ScriptedTransport::new().fail("connection reset"));
        let err = client.login("ana", "secret").unwrap_err();
        assert!(matches!(err, SaveyError::Transport(_)));
    }
}
