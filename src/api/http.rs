//! HTTP implementation of [`TodoApi`] on top of `reqwest`.

use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, RequestBuilder, Response};

use super::{LoginArgs, LoginResponse, NoteArgs, TodoApi};
use crate::error::{NoteError, Result};
use crate::models::{CreatedRecord, NoteId, NoteRecord};

/// Characters left as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    root: Rc<str>,
}

impl HttpApi {
    pub fn new(root: &str) -> Self {
        Self {
            client: Client::new(),
            root: Rc::from(root.trim_end_matches('/')),
        }
    }

    fn todo_url(&self) -> String {
        format!("{}/todo", self.root)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/todo/{}", self.root, encode_id(id))
    }
}

fn encode_id(id: &NoteId) -> String {
    utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string()
}

/// Send and turn a non-2xx status into an error
async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(NoteError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn login(&self, credentials: &str) -> Result<String> {
        let url = format!("{}/auth/login", self.root);
        let response = send(self.client.post(url).json(&LoginArgs { value: credentials })).await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.access_token)
    }

    async fn list_notes(&self, token: &str) -> Result<Vec<NoteRecord>> {
        let response = send(self.client.get(self.todo_url()).bearer_auth(token)).await?;
        Ok(response.json().await?)
    }

    async fn create_note(&self, token: &str, args: &NoteArgs<'_>) -> Result<CreatedRecord> {
        let response = send(self.client.post(self.todo_url()).bearer_auth(token).json(args)).await?;
        Ok(response.json().await?)
    }

    async fn delete_note(&self, token: &str, id: &NoteId) -> Result<()> {
        send(self.client.delete(self.note_url(id)).bearer_auth(token)).await?;
        Ok(())
    }

    async fn update_note(&self, token: &str, id: &NoteId, args: &NoteArgs<'_>) -> Result<()> {
        send(self.client.put(self.note_url(id)).bearer_auth(token).json(args)).await?;
        Ok(())
    }

    async fn toggle_note(&self, token: &str, id: &NoteId) -> Result<()> {
        let url = format!("{}/toggle", self.note_url(id));
        send(self.client.put(url).bearer_auth(token)).await?;
        Ok(())
    }
}
