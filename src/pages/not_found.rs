use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" dir="rtl">
            <h1>{"הדף לא נמצא"}</h1>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"חזרה לדף הבית"}
            </Link<Route>>
        </div>
    }
}
