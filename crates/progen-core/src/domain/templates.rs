//! Template functions for every scaffolded file.
//!
//! Each function is pure: output depends only on its arguments, and nothing
//! here touches the filesystem. Go sources are opaque payload text.

use crate::domain::entities::context::ProjectContext;

/// Default value of the generated `-config-path` flag.
pub const DEFAULT_CONFIG_PATH: &str = "./configs/config.yaml";

pub fn readme(ctx: &ProjectContext) -> String {
    format!(
        "# {}\n\nWrite your project description here.",
        ctx.project_name()
    )
}

pub fn config_yaml(ctx: &ProjectContext) -> String {
    format!(
        "# Put your configuration files here\n\nserviceName: {}",
        ctx.project_name().to_uppercase()
    )
}

pub fn config_source() -> String {
    r#"package configs

import (
	"os"

	"gopkg.in/yaml.v3"
)

type Config struct {
	ServiceName string `yaml:"serviceName"`
}

func ReadConfig(path string) (*Config, error) {
	configFile, err := os.ReadFile(path)
	if err != nil {
		return nil, err
	}

	return readConfigFromFile(configFile)
}

func readConfigFromFile(fileBytes []byte) (*Config, error) {
	cfg := new(Config)
	if err := yaml.Unmarshal(fileBytes, cfg); err != nil {
		return nil, err
	}

	return cfg, nil
}"#
    .to_string()
}

/// Entry point that loads `configs/config.yaml` through the generated
/// `configs` package.
///
/// An empty module path still renders; the import degrades to `"/configs"`.
pub fn main_with_config(ctx: &ProjectContext) -> String {
    format!(
        r#"package main

import (
	"flag"
	"log"

	"{module}/configs"
)

func main() {{
	var configPath string
	flag.StringVar(&configPath, "config-path", "{default}", "Path to config file")
	flag.Parse()

	config, err := configs.ReadConfig(configPath)
	if err != nil {{
		log.Fatal(err)
	}}
	log.Println(config.ServiceName)
}}"#,
        module = ctx.module_path(),
        default = DEFAULT_CONFIG_PATH,
    )
}

pub fn main_minimal() -> String {
    "package main\n\nfunc main() {\n\n}".to_string()
}

pub fn gitignore() -> String {
    "# Configs\n/configs/config.yaml\n\n# Environment\n/.env".to_string()
}

pub fn env_file() -> String {
    "# Add environment variables here".to_string()
}

pub fn run_script() -> String {
    "# Add your scripts here".to_string()
}

pub fn dockerignore() -> String {
    "configs/config.yaml".to_string()
}

/// Two-stage container build compiling `entry_point`.
pub fn dockerfile(entry_point: &str) -> String {
    format!(
        r#"# Use specific versions for base images
FROM golang:1.22.0-alpine3.19 AS builder

WORKDIR /app

# Copy only necessary files for module downloading
COPY go.mod go.sum ./

# Download dependencies
RUN go mod download

# Copy the rest of the application code
COPY . .

# Build the application with optimized flags
RUN CGO_ENABLED=0 \
    GOOS=linux \
    GOARCH=amd64 \
    go build -ldflags="-s -w" -o /app/main {entry_point}

# Use a smaller base image for the final stage
FROM alpine:3.19

WORKDIR /app

# Copy built binary and configuration file
COPY --from=builder /app/main .

# Expose port
EXPOSE 8080

# Set the entry point with necessary parameters
ENTRYPOINT ["./main"]
"#
    )
}

pub fn docker_compose(ctx: &ProjectContext) -> String {
    format!(
        r#"version: "3.9"

services:
    {name}:
        container_name: {name}
        platform: linux/amd64
        build:
            context: .
            dockerfile: Dockerfile
        restart: unless-stopped
        volumes:
            - ./configs/config.yaml:/app/configs/config.yaml
        ports:
            - "8080:8080"
"#,
        name = ctx.project_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> ProjectContext {
        ProjectContext::new("widget", "github.com/acme/widget")
    }

    #[test]
    fn readme_title_uses_project_name() {
        let readme = readme(&widget());
        assert!(readme.starts_with("# widget\n"));
        assert!(readme.ends_with("Write your project description here."));
    }

    #[test]
    fn config_yaml_upper_cases_service_name() {
        assert!(config_yaml(&widget()).contains("serviceName: WIDGET"));
    }

    #[test]
    fn config_yaml_with_blank_name() {
        assert!(config_yaml(&ProjectContext::default()).ends_with("serviceName: "));
    }

    #[test]
    fn main_imports_module_configs() {
        let main = main_with_config(&widget());
        assert!(main.contains(r#""github.com/acme/widget/configs""#));
        assert!(main.contains(r#""config-path", "./configs/config.yaml""#));
        assert!(main.contains("log.Println(config.ServiceName)"));
    }

    #[test]
    fn main_degrades_without_module_path() {
        let main = main_with_config(&ProjectContext::new("widget", ""));
        assert!(main.contains(r#""/configs""#));
    }

    #[test]
    fn minimal_main_has_no_imports() {
        let main = main_minimal();
        assert!(main.starts_with("package main"));
        assert!(!main.contains("import"));
    }

    #[test]
    fn config_source_reads_service_name() {
        let src = config_source();
        assert!(src.contains("package configs"));
        assert!(src.contains(r#"`yaml:"serviceName"`"#));
        assert!(src.contains("func ReadConfig(path string)"));
    }

    #[test]
    fn compose_keys_service_by_project_name() {
        let compose = docker_compose(&widget());
        assert!(compose.contains("\n    widget:\n"));
        assert!(compose.contains("container_name: widget"));
    }

    #[test]
    fn dockerfile_builds_given_entry_point() {
        assert!(dockerfile("cmd/api/main.go").contains("-o /app/main cmd/api/main.go"));
    }

    #[test]
    fn templates_are_deterministic() {
        assert_eq!(readme(&widget()), readme(&widget()));
        assert_eq!(docker_compose(&widget()), docker_compose(&widget()));
    }
}
