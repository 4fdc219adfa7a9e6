use axum::{response::Html, Json};
use utoipa::{openapi::OpenApi as OpenApiDoc, OpenApi};

use crate::adapter::http::{
    app_error_impl::{ErrorBody, ErrorResponse},
    routes::reset_code,
    schema::reset_code::{
        CallableResetCodeRequest, CallableResetCodeResponse, ResetCodeRequest, ResetCodeResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        reset_code::send_reset_code,
        reset_code::send_reset_code_callable
    ),
    components(
        schemas(
            ErrorBody,
            ErrorResponse,
            ResetCodeRequest,
            ResetCodeResponse,
            CallableResetCodeRequest,
            CallableResetCodeResponse
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<OpenApiDoc> {
    Json(ApiDoc::openapi())
}

pub async fn docs_ui() -> Html<&'static str> {
    Html(
        r#"
            <!doctype html>
            <html>
              <head>
                <title>API docs</title>
                <meta charset="utf-8">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <script src="https://unpkg.com/@stoplight/elements/web-components.min.js"></script>
                <link rel="stylesheet" href="https://unpkg.com/@stoplight/elements/styles.min.css">
              </head>
              <body style="height: 100%; margin: 0;">
                <elements-api
                  apiDescriptionUrl="openapi.json"
                  basePath="/"
                  router="hash"
                  layout="sidebar"
                />
              </body>
            </html>
        "#,
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use utoipa::OpenApi;

    use crate::adapter::http::docs::ApiDoc;

    #[rstest]
    fn test_openapi_lists_reset_code_routes() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/reset-code"));
        assert!(doc.paths.paths.contains_key("/sendResetCode"));
    }
}
