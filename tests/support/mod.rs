#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// JDBC family catalog: a PostgreSQL bean whose properties and dependant
/// beans live on the shared `forage-jdbc-common` artifact, plus runtime
/// bundles nested under the data-source factory.
pub fn jdbc_catalog() -> Value {
    json!({
        "version": "1.0",
        "generatedBy": "forage-catalog-generator",
        "timestamp": 1700000000,
        "components": [
            {
                "artifactId": "forage-jdbc-common",
                "groupId": "io.kaoto.forage",
                "version": "1.0",
                "configurationProperties": [
                    {"name": "jdbc.name", "type": "bean-name", "required": true, "label": "Bean name"},
                    {"name": "jdbc.url", "type": "string", "required": true,
                     "defaultValue": "jdbc:postgresql://localhost:5432/postgres", "label": "JDBC URL"},
                    {"name": "jdbc.username", "type": "string", "required": true},
                    {"name": "jdbc.password", "type": "password", "required": true},
                    {"name": "jdbc.pool.size", "type": "integer", "defaultValue": 10},
                    {"name": "ssl.enabled", "type": "boolean", "defaultValue": "false"},
                    {"name": "transaction.enabled", "type": "boolean", "defaultValue": "true"}
                ],
                "dependantBeans": [
                    {"dependsOnProperty": "ssl.enabled", "beanType": "javax.net.ssl.SSLContext",
                     "className": "io.kaoto.forage.jdbc.SslContextFactory"},
                    {"dependsOnProperty": "transaction.enabled", "beanType": "org.springframework.transaction.PlatformTransactionManager",
                     "namedBeans": ["PROPAGATION_REQUIRED"]}
                ]
            },
            {
                "artifactId": "forage-jdbc-postgresql",
                "groupId": "io.kaoto.forage",
                "version": "1.0",
                "beans": [
                    {"name": "postgresql", "components": ["camel-sql", "camel-jdbc"],
                     "description": "PostgreSQL data source", "feature": "Database"}
                ]
            },
            {
                "artifactId": "forage-jdbc-mysql",
                "groupId": "io.kaoto.forage",
                "version": "1.0",
                "beans": [
                    {"name": "mysql", "components": ["camel-sql"], "feature": "Database"}
                ]
            },
            {
                "artifactId": "forage-jdbc",
                "groupId": "io.kaoto.forage",
                "version": "1.0",
                "factories": [
                    {
                        "name": "dataSource",
                        "components": ["camel-sql"],
                        "beanType": "javax.sql.DataSource",
                        "factoryType": "DataSource",
                        "runtimeType": "main",
                        "autowired": true,
                        "runtimes": [
                            {
                                "artifactId": "forage-jdbc-starter",
                                "groupId": "io.kaoto.forage",
                                "version": "1.0",
                                "runtimeType": "spring-boot",
                                "factories": [
                                    {"name": "springDataSource", "beanType": "javax.sql.DataSource"}
                                ]
                            },
                            {
                                "artifactId": "forage-jdbc-quarkus",
                                "groupId": "io.kaoto.forage",
                                "version": "1.0",
                                "runtimeType": "quarkus",
                                "factories": [
                                    {"name": "quarkusDataSource", "beanType": "javax.sql.DataSource"}
                                ],
                                "dependantBeans": [
                                    {"dependsOnProperty": "transaction.enabled",
                                     "beanType": "jakarta.transaction.TransactionManager"}
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "artifactId": "forage-jdbc-starter",
                "groupId": "io.kaoto.forage",
                "version": "1.0"
            }
        ]
    })
}

/// Persist a catalog document to a temporary file.
pub fn write_catalog(catalog: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog file")?;
    serde_json::to_writer_pretty(&mut file, catalog)?;
    file.flush()?;
    Ok(file)
}

/// Serve `body` with `status` for `GET /catalog.json` and return its URL.
pub async fn mount_catalog(server: &MockServer, status: u16, body: String) -> String {
    Mock::given(method("GET"))
        .and(path("/catalog.json"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
    format!("{}/catalog.json", server.uri())
}
