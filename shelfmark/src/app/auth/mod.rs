use leptos::prelude::*;
use shelfmark_components::auth::{LoginForm, RegisterForm};
use shelfmark_shared::urls::{LOGIN_PAGE, REGISTER_PAGE};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 p-6">
            <h1 class="text-3xl font-bold">"Log in"</h1>
            <LoginForm />
            <a class="underline" href=REGISTER_PAGE>"No account yet? Register"</a>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-4 p-6">
            <h1 class="text-3xl font-bold">"Register"</h1>
            <RegisterForm />
            <a class="underline" href=LOGIN_PAGE>"Already registered? Log in"</a>
        </div>
    }
}
