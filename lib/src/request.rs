use crate::error::Error;

async fn read_response<T: serde::de::DeserializeOwned>(res: reqwest::Response) -> Result<T, Error> {
    let status = res.status();
    tracing::debug!("responded with status {status:?}");
    res.json::<Response<T>>()
        .await
        .map_err(Error::from)
        .and_then(Response::payload)
}

impl crate::Client {
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.base_url(), path)
    }

    #[tracing::instrument(name = "get", skip(self))]
    pub(crate) async fn get_request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, Error> {
        let uri = self.build_url(path);
        tracing::debug!("calling {uri}");
        let mut req = self.inner.get(uri);
        if let Some(ref credentials) = self.credentials {
            req = req.query(credentials);
        }
        let res = req.send().await?;
        read_response(res).await
    }
}

/// The provider reports failures in-band: the body carries
/// `"error": true` and a textual reason, whatever the http status.
/// The error arm has to stay first so an error body never decodes as
/// a sparse success.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Response<T> {
    Error {
        #[allow(unused)]
        error: bool,
        reason: String,
    },
    Success {
        #[serde(flatten)]
        payload: T,
    },
}

impl<T> Response<T> {
    fn payload(self) -> Result<T, Error> {
        match self {
            Self::Error { reason, .. } => Err(Error::Provider { reason }),
            Self::Success { payload } => Ok(payload),
        }
    }
}
