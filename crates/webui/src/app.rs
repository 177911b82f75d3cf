use crate::components::{not_found::NotFound, notification::ToastProvider};
use crate::features::{
    self, CategoryPage, OrderPage, PaymentPage, PersonnelPage, ProductPage, RoomPage, ServicePage,
    StaffPage,
};
use crate::schema::ResourceSchema;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/orders")]
    Orders,
    #[at("/payments")]
    Payments,
    #[at("/categories")]
    Categories,
    #[at("/services")]
    Services,
    #[at("/rooms")]
    Rooms,
    #[at("/products")]
    Products,
    #[at("/staff")]
    Staff,
    #[at("/personnel")]
    Personnel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The route serving a resource's page. Nav entries derive from
    /// [`features::ALL`] through this, so the two cannot drift apart.
    pub fn for_resource(schema: &ResourceSchema) -> Route {
        match schema.path {
            "orders" => Route::Orders,
            "payments" => Route::Payments,
            "categories" => Route::Categories,
            "services" => Route::Services,
            "rooms" => Route::Rooms,
            "products" => Route::Products,
            "staff" => Route::Staff,
            "personnel" => Route::Personnel,
            _ => Route::NotFound,
        }
    }

    pub fn render(route: Route) -> Html {
        match route {
            Route::Home | Route::Orders => html! { <OrderPage /> },
            Route::Payments => html! { <PaymentPage /> },
            Route::Categories => html! { <CategoryPage /> },
            Route::Services => html! { <ServicePage /> },
            Route::Rooms => html! { <RoomPage /> },
            Route::Products => html! { <ProductPage /> },
            Route::Staff => html! { <StaffPage /> },
            Route::Personnel => html! { <PersonnelPage /> },
            Route::NotFound => html! { <NotFound /> },
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <div class="container">
                <BrowserRouter>
                    <nav>
                        { for features::ALL.iter().map(|schema| html! {
                            <Link<Route> to={Route::for_resource(schema)}>
                                { schema.title }
                            </Link<Route>>
                        })}
                    </nav>
                    <Switch<Route> render={Route::render} />
                </BrowserRouter>
            </div>
        </ToastProvider>
    }
}
