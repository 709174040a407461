//! Assembly of the README document for the machine learning development
//! environment.
//!
//! The narrative is a fixed template; the shell examples are built with
//! [`format_shell_block`] and interpolated into it. Rendering is
//! deterministic: no input is consulted, so every call returns the same
//! document.

use crate::code_block::format_shell_block;

/// Render the complete README document.
///
/// The returned string starts with a blank line ahead of the title and ends
/// with a trailing newline after the last code block, matching the layout the
/// document has always shipped with.
pub fn render() -> String {
    let clone_repo = format_shell_block("git clone <your-repo-url>\ncd machine_learning");
    let make_build = format_shell_block("make build");
    let make_up = format_shell_block("make up");
    let make_down = format_shell_block("make down");
    let make_clean = format_shell_block("make clean");
    let make_rmi = format_shell_block("make rmi");
    let make_ps = format_shell_block("make ps");
    let make_logs = format_shell_block("make logs");
    let make_export = format_shell_block("make export");
    let make_setup = format_shell_block("make setup");
    let make_init = format_shell_block("make init");

    format!(
        "
# Machine Learning Development Environment

This project sets up a Dockerized environment for machine learning development with Jupyter Notebook and a Java service. It uses NVIDIA CUDA for GPU acceleration and provides a clean, portable setup for your development needs.

## Prerequisites

- Docker
- Docker Compose
- NVIDIA Docker (for GPU support)
- Make

## Setup Instructions

### Step 1: Clone the Repository

Clone the repository and navigate to the project directory.

{clone_repo}

### Step 2: Build Docker Images

To build the Docker images, run:

{make_build}

### Step 3: Start Docker Containers

To start the Docker containers, run:

{make_up}

### Step 4: Access Jupyter Notebook

Open your web browser and go to http://localhost:8888. You should see the Jupyter Notebook interface.

## Makefile Targets

The Makefile provides several useful targets for managing and diagnosing the application:

### Build Docker images

{make_build}

### Start Docker containers

{make_up}

### Stop Docker containers

{make_down}

### Clean Docker environment (removes containers and images)

{make_clean}

### Remove Docker images

{make_rmi}

### Show Docker containers

{make_ps}

### Logs from Docker containers

{make_logs}

### Export environment variables from .env file

{make_export}

### Ensure all necessary directories are created

{make_setup}

### Initialize the environment

{make_init}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contains_title_heading() {
        assert!(render().contains("# Machine Learning Development Environment"));
    }

    #[test]
    fn test_contains_build_block() {
        assert!(render().contains("```sh\nmake build\n```"));
    }

    #[test]
    fn test_starts_with_blank_line_before_title() {
        let document = render();
        assert!(document.starts_with("\n# Machine Learning Development Environment"));
    }

    #[test]
    fn test_ends_with_trailing_newline() {
        assert!(render().ends_with("```\n"));
    }

    #[test]
    fn test_fences_are_balanced() {
        // 11 distinct shell examples; the build and up blocks appear twice
        // (setup steps and Makefile targets), so 13 blocks in total.
        let document = render();
        assert_eq!(document.matches("```sh\n").count(), 13);
        assert_eq!(document.matches("```").count(), 26);
    }

    #[test]
    fn test_documents_every_makefile_target() {
        let document = render();
        for target in [
            "build", "up", "down", "clean", "rmi", "ps", "logs", "export", "setup", "init",
        ] {
            let block = format_shell_block(&format!("make {target}"));
            assert!(document.contains(&block), "missing block for `make {target}`");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(), render());
    }
}
