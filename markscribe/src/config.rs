//! Provider credentials resolved from command-line flags or the environment.
//!
//! Every credential is optional. A missing GitHub token switches the GitHub
//! functions to anonymous mode, while missing book-service credentials only
//! surface as validation errors once a template calls the affected function.
//! Blank values are treated as absent so an exported-but-empty variable does
//! not masquerade as a credential.

use std::fmt;

use clap::Args;

/// Credentials for every provider the template functions may reach.
///
/// # Examples
///
/// ```
/// use markscribe::Credentials;
///
/// let credentials = Credentials {
///     github_token: Some("   ".to_owned(),),
///     ..Credentials::default()
/// };
/// assert_eq!(credentials.github_token(), None);
/// ```
#[derive(Clone, Default, Args,)]
pub struct Credentials
{
    /// GitHub token used for GraphQL queries; anonymous mode without it.
    #[arg(long = "github-token", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String,>,

    /// Goodreads developer key.
    #[arg(long = "goodreads-token", env = "GOODREADS_TOKEN", hide_env_values = true)]
    pub goodreads_token: Option<String,>,

    /// Numeric Goodreads user id whose shelves are read.
    #[arg(long = "goodreads-user-id", env = "GOODREADS_USER_ID")]
    pub goodreads_user_id: Option<String,>,

    /// Literal.club account email.
    #[arg(long = "literal-email", env = "LITERAL_EMAIL", hide_env_values = true)]
    pub literal_email: Option<String,>,

    /// Literal.club account password.
    #[arg(long = "literal-password", env = "LITERAL_PASSWORD", hide_env_values = true)]
    pub literal_password: Option<String,>,
}

impl Credentials
{
    pub fn github_token(&self,) -> Option<&str,>
    {
        present(&self.github_token,)
    }

    pub fn goodreads_token(&self,) -> Option<&str,>
    {
        present(&self.goodreads_token,)
    }

    pub fn goodreads_user_id(&self,) -> Option<&str,>
    {
        present(&self.goodreads_user_id,)
    }

    pub fn literal_email(&self,) -> Option<&str,>
    {
        present(&self.literal_email,)
    }

    pub fn literal_password(&self,) -> Option<&str,>
    {
        present(&self.literal_password,)
    }
}

fn present(value: &Option<String,>,) -> Option<&str,>
{
    value.as_deref().map(str::trim,).filter(|value| !value.is_empty(),)
}

fn redacted(value: Option<&str,>,) -> Option<&'static str,>
{
    value.map(|_| "<redacted>",)
}

impl fmt::Debug for Credentials
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        f.debug_struct("Credentials",)
            .field("github_token", &redacted(self.github_token(),),)
            .field("goodreads_token", &redacted(self.goodreads_token(),),)
            .field("goodreads_user_id", &self.goodreads_user_id(),)
            .field("literal_email", &self.literal_email(),)
            .field("literal_password", &redacted(self.literal_password(),),)
            .finish()
    }
}
