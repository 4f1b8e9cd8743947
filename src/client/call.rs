//! API call builder with canonical parameter ordering
//!
//! The DAM recomputes the request signature from the exact query string it
//! receives, so serialization must be byte-for-byte reproducible. The
//! builder keeps positional parameters sorted by index no matter the order
//! they were supplied in.

use url::form_urlencoded;

/// One outbound API call: a function name plus positional parameters.
///
/// Parameters follow the DAM's `param1..paramN` convention. A parameter
/// that is never supplied is omitted from the query entirely; supplying an
/// empty string sends `paramN=` (some functions take empty values as
/// explicit defaults).
///
/// # Example
/// ```
/// use damlink::client::ApiCall;
///
/// let call = ApiCall::new("search_get_previews")
///     .param(8, "thm")
///     .param(1, "cat")
///     .param(5, "-1");
/// assert_eq!(
///     call.canonical_query("bot"),
///     "user=bot&function=search_get_previews&param1=cat&param5=-1&param8=thm",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    function: String,
    params: Vec<(u8, String)>,
}

impl ApiCall {
    /// Start a call to the named API function.
    pub fn new(function: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            params: Vec::new(),
        }
    }

    /// Set positional parameter `paramN`, replacing any earlier value.
    pub fn param(mut self, index: u8, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.params.binary_search_by_key(&index, |(i, _)| *i) {
            Ok(pos) => self.params[pos].1 = value,
            Err(pos) => self.params.insert(pos, (index, value)),
        }
        self
    }

    /// API function name
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Supplied parameters, ascending by index
    pub fn params(&self) -> &[(u8, String)] {
        &self.params
    }

    /// Value of `paramN`, if supplied
    pub fn param_value(&self, index: u8) -> Option<&str> {
        self.params
            .binary_search_by_key(&index, |(i, _)| *i)
            .ok()
            .map(|pos| self.params[pos].1.as_str())
    }

    /// Render the stable query string the signature is computed over:
    /// `user=<u>&function=<f>&param1=<v1>&...&paramN=<vN>`, form-encoded.
    pub fn canonical_query(&self, user_name: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("user", user_name);
        query.append_pair("function", &self.function);
        for (index, value) in &self.params {
            query.append_pair(&format!("param{index}"), value);
        }
        query.finish()
    }
}
