use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

pub struct Error {
    msg: String,
    technical_msg: String,
    parent: Option<Box<Error>>,
    unauthenticated: bool,
}

impl Error {
    pub fn new(msg: &str, technical_msg: &str) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: technical_msg.to_owned(),
            parent: None,
            unauthenticated: false,
        }
    }

    pub fn from_parent(msg: &str, parent: Error) -> Self {
        Self {
            msg: msg.to_owned(),
            technical_msg: msg.to_owned(),
            parent: Some(Box::from(parent)),
            unauthenticated: false,
        }
    }

    /// The server answered 401. The api client has already cleared the
    /// session and started the redirect to the login page, so this error
    /// must never be surfaced as an alert.
    pub fn unauthenticated() -> Self {
        Self {
            msg: "Your session has expired. Please log in again.".to_owned(),
            technical_msg: "Not authenticated [status: 401]".to_owned(),
            parent: None,
            unauthenticated: true,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.unauthenticated
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::new(DEFAULT_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.technical_msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.technical_msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::new(
            DEFAULT_ERROR_MESSAGE,
            &value
                .as_string()
                .unwrap_or("Unknown error has happened".to_owned()),
        )
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        let text = format!("A cast has failed for element: {element:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        let text = format!("A cast has failed for node: {node:?}");
        Self::new(DEFAULT_ERROR_MESSAGE, &text)
    }
}
