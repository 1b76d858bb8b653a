//! Command-line arguments.

use clap::{Parser, ValueEnum};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

const AFTER_HELP: &str = r#"EXAMPLES:
  registry-cli universities get           # Get all universities
  registry-cli universities get 1         # Get university with ID 1
  registry-cli universities post          # Create a new university
  registry-cli universities put 1         # Update university with ID 1
  registry-cli universities delete 1      # Delete university with ID 1

  registry-cli students get               # Get all students
  registry-cli students get 2             # Get student with ID 2
  registry-cli students post              # Create a new student

EXAMPLE DATA:
  university: {"name": "Tech University", "location": "Boston"}
  student:    {"facultyNumber": "FN001", "firstName": "John", "middleName": "Michael",
               "lastName": "Doe", "universityId": 1}"#;

#[derive(Debug, Parser)]
#[command(name = "registry-cli")]
#[command(about = "Student-University API CLI Tool", long_about = None)]
#[command(arg_required_else_help = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Base URL of the registry API
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub url: Url,

    /// Resource to work with
    #[arg(value_enum, ignore_case = true)]
    pub endpoint: Endpoint,

    /// HTTP method to issue
    #[arg(value_enum, ignore_case = true)]
    pub method: Method,

    /// Record id (required for put and delete)
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Endpoint {
    /// Work with universities
    Universities,
    /// Work with students
    Students,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Universities => "/universities",
            Endpoint::Students => "/students",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// GET request (list all or by ID)
    Get,
    /// POST request (create new)
    Post,
    /// PUT request (update by ID)
    Put,
    /// DELETE request (delete by ID)
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    pub fn requires_id(self) -> bool {
        matches!(self, Method::Put | Method::Delete)
    }

    pub fn sends_body(self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}
