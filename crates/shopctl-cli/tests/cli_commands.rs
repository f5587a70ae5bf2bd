use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

fn base_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("shopctl"));
    cmd.env("HOME", home);
    cmd
}

fn login_body(role: &str) -> serde_json::Value {
    json!({
        "token": "tok123",
        "user": {
            "id": "u-1",
            "name": "Jane Doe",
            "email": "jane@example.com",
            "role": role
        }
    })
}

fn login(home: &Path, addr: &str, role: &str, server: &mut Server) {
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(login_body(role).to_string())
        .create();

    base_cmd(home)
        .args([
            "--addr",
            addr,
            "--insecure",
            "login",
            "credentials",
            "--email",
            "jane@example.com",
            "--password",
            "hunter2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));
}

#[test]
fn protected_command_without_session_is_denied() {
    let home_dir = tempdir().expect("tempdir");
    let server = Server::new();

    base_cmd(home_dir.path())
        .args(["--addr", &server.url(), "--insecure", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authorized"));
}

#[test]
fn login_then_user_list_attaches_bearer_token() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let addr = server.url();

    login(home_dir.path(), &addr, "admin", &mut server);

    let users_body = json!([{
        "_id": "u-2",
        "name": "Sam Buyer",
        "email": "sam@example.com",
        "createdAt": "2024-03-01T00:00:00Z"
    }]);
    server
        .mock("GET", "/users")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body(users_body.to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sam@example.com"));
}

#[test]
fn customer_session_is_denied_for_protected_commands() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let addr = server.url();

    login(home_dir.path(), &addr, "customer", &mut server);

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authorized"));
}

#[test]
fn external_callback_flow_sets_session() {
    let home_dir = tempdir().expect("tempdir");
    let server = Server::new();
    let addr = server.url();

    let callback = "http://localhost:5173/auth-callback\
        ?token=tok123&id=u-1&email=jane%40example.com&name=Jane%20Doe&role=admin";
    base_cmd(home_dir.path())
        .args([
            "--addr",
            &addr,
            "--insecure",
            "login",
            "external",
            "--callback-url",
            callback,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    base_cmd(home_dir.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));
}

#[test]
fn incomplete_external_callback_fails_and_leaves_no_session() {
    let home_dir = tempdir().expect("tempdir");
    let server = Server::new();
    let addr = server.url();

    let callback = "http://localhost:5173/auth-callback?token=tok123&id=u-1&name=Jane%20Doe";
    base_cmd(home_dir.path())
        .args([
            "--addr",
            &addr,
            "--insecure",
            "login",
            "external",
            "--callback-url",
            callback,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("external sign-in failed"));

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authorized"));
}

#[test]
fn logout_clears_the_session() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let addr = server.url();

    login(home_dir.path(), &addr, "admin", &mut server);

    base_cmd(home_dir.path())
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    base_cmd(home_dir.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "user", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not authorized"));
}

#[test]
fn stats_overview_aggregates_the_three_lists() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let addr = server.url();

    login(home_dir.path(), &addr, "admin", &mut server);

    let products = json!([
        {
            "_id": "p-1",
            "name": "Tee",
            "description": "Plain tee",
            "price": 19.99,
            "category": "apparel",
            "images": [{ "url": "https://cdn.example.com/tee.jpg" }],
            "stock": 12
        },
        {
            "_id": "p-2",
            "name": "Mug",
            "description": "Ceramic mug",
            "price": 9.5,
            "category": "kitchen",
            "images": [],
            "stock": 40
        }
    ]);
    let orders = json!([
        {
            "_id": "o-1",
            "user": { "name": "Sam Buyer", "email": "sam@example.com" },
            "items": [{
                "product": { "name": "Tee", "images": [], "price": 19.99 },
                "quantity": 2,
                "size": "M"
            }],
            "totalAmount": 39.98,
            "status": "pending",
            "shippingAddress": {
                "fullName": "Sam Buyer",
                "phone": "5550100",
                "pincode": "560001",
                "state": "KA",
                "city": "Bengaluru",
                "addressLine1": "1 Main St"
            },
            "createdAt": "2024-03-02T00:00:00Z"
        }
    ]);
    let users = json!([{
        "_id": "u-2",
        "name": "Sam Buyer",
        "email": "sam@example.com",
        "createdAt": "2024-03-01T00:00:00Z",
        "role": "customer"
    }]);

    server
        .mock("GET", "/products")
        .with_status(200)
        .with_body(products.to_string())
        .create();
    server
        .mock("GET", "/orders")
        .with_status(200)
        .with_body(orders.to_string())
        .create();
    server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(users.to_string())
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_products\": 2"))
        .stdout(predicate::str::contains("\"total_orders\": 1"))
        .stdout(predicate::str::contains("\"total_revenue\": 39.98"));
}

#[test]
fn product_delete_reports_success() {
    let home_dir = tempdir().expect("tempdir");
    let mut server = Server::new();
    let addr = server.url();

    login(home_dir.path(), &addr, "admin", &mut server);

    server
        .mock("DELETE", "/products/p-1")
        .match_header("authorization", "Bearer tok123")
        .with_status(200)
        .with_body("{}")
        .create();

    base_cmd(home_dir.path())
        .args(["--addr", &addr, "--insecure", "product", "delete", "p-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted"));
}
