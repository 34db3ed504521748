use std::process;

use anyhow::{Context, Result};
use blog_client::{
    BlogClient, BlogClientError, NewComment, NewPost, NewUser, Post, PostDetails, User,
};
use clap::{Args, Parser, Subcommand};

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";
const SERVER_ENV: &str = "BLOG_SERVER";

#[derive(Debug, Parser)]
#[command(name = "blog-cli", version, about = "CLI клиент для blog-server")]
struct Cli {
    /// Адрес сервера. По умолчанию берётся из BLOG_SERVER или http://127.0.0.1:3000.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Операции с пользователями.
    #[command(subcommand)]
    User(UserCommand),
    /// Операции с постами.
    #[command(subcommand)]
    Post(PostCommand),
    /// Операции с комментариями.
    #[command(subcommand)]
    Comment(CommentCommand),
}

#[derive(Debug, Subcommand)]
enum UserCommand {
    /// Создание пользователя.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
    },
    /// Получение пользователя по id.
    Get {
        #[arg(long)]
        id: i64,
        /// Связи через запятую: posts,comments.
        #[arg(long, value_delimiter = ',')]
        include: Vec<String>,
    },
}

#[derive(Debug, Subcommand)]
enum PostCommand {
    /// Создание поста.
    Create(CreatePostArgs),
    /// Получение поста вместе с автором и комментариями.
    Get {
        #[arg(long)]
        id: i64,
    },
    /// Список всех постов.
    List,
}

#[derive(Debug, Args)]
struct CreatePostArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    body: String,
    /// Идентификатор автора.
    #[arg(long)]
    author: Option<i64>,
}

#[derive(Debug, Subcommand)]
enum CommentCommand {
    /// Создание комментария.
    Create {
        #[arg(long)]
        body: String,
        #[arg(long)]
        user_id: i64,
        #[arg(long)]
        post_id: i64,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let server = resolve_server(cli.server, std::env::var(SERVER_ENV).ok());
    let client = BlogClient::new(server).context("не удалось создать HTTP-клиент")?;

    match cli.command {
        Command::User(UserCommand::Create {
            name,
            username,
            email,
        }) => {
            let id = client
                .create_user(&NewUser {
                    name,
                    username,
                    email,
                })
                .await
                .map_err(map_client_error)?;
            println!("Пользователь создан: id={id}");
        }
        Command::User(UserCommand::Get { id, include }) => {
            let include: Vec<&str> = include.iter().map(String::as_str).collect();
            let user = client
                .get_user(id, &include)
                .await
                .map_err(map_client_error)?;
            print_user(&user)?;
        }
        Command::Post(PostCommand::Create(args)) => {
            let id = client
                .create_post(&NewPost {
                    title: args.title,
                    body: args.body,
                    author: args.author,
                })
                .await
                .map_err(map_client_error)?;
            println!("Пост создан: id={id}");
        }
        Command::Post(PostCommand::Get { id }) => {
            let post = client.get_post(id).await.map_err(map_client_error)?;
            print_post_details(&post);
        }
        Command::Post(PostCommand::List) => {
            let posts = client.list_posts().await.map_err(map_client_error)?;
            print_list(&posts);
        }
        Command::Comment(CommentCommand::Create {
            body,
            user_id,
            post_id,
        }) => {
            let id = client
                .create_comment(&NewComment {
                    body,
                    user_id,
                    post_id,
                })
                .await
                .map_err(map_client_error)?;
            println!("Комментарий создан: id={id}");
        }
    }

    Ok(())
}

fn resolve_server(flag: Option<String>, env: Option<String>) -> String {
    let raw = flag
        .or(env)
        .filter(|server| !server.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw.trim().to_string())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn map_client_error(err: BlogClientError) -> anyhow::Error {
    let message = match err {
        BlogClientError::NotFound => "ресурс не найден".to_string(),
        BlogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        BlogClientError::Server(message) => format!("ошибка сервера: {message}"),
        BlogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_user(user: &User) -> Result<()> {
    let json = serde_json::to_string_pretty(user).context("не удалось сериализовать ответ")?;
    println!("{json}");
    Ok(())
}

fn print_post_details(post: &PostDetails) {
    println!("Пост");
    println!("id: {}", post.id);
    println!("title: {}", post.title);
    println!("body: {}", post.body);
    match &post.author {
        Some(author) => println!("author: {} (@{}, id={})", author.name, author.username, author.id),
        None => println!("author: -"),
    }
    println!("created_at: {}", post.created_at);
    println!("updated_at: {}", post.updated_at);
    println!("Комментариев: {}", post.comments.len());
    for comment in &post.comments {
        println!("- [{}] user_id={}: {}", comment.id, comment.user_id, comment.body);
    }
}

fn format_author(post: &Post) -> String {
    post.author
        .map(|author| author.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn print_list(posts: &[Post]) {
    println!("Постов: {}", posts.len());

    for post in posts {
        println!(
            "- [{}] {} (author={})",
            post.id,
            post.title,
            format_author(post)
        );
    }
}
