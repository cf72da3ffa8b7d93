//! Layered architecture: api -> services -> repositories -> models.

pub const TEMPLATES: &[(&str, &str)] = &[
    ("main", MAIN),
    ("config", CONFIG),
    ("model", MODEL),
    ("schema", SCHEMA),
    ("service", SERVICE),
    ("repository", REPOSITORY),
    ("router", ROUTER),
    ("database", DATABASE),
    ("api_router", API_ROUTER),
    ("package", PACKAGE),
];

const MAIN: &str = r#"# {{ file_path }}
from fastapi import FastAPI

from app.api.v1.api import api_router
from app.core.config import settings
from app.db.session import Base, engine


def create_application() -> FastAPI:
    application = FastAPI(
        title=settings.PROJECT_NAME,
        openapi_url=f"{settings.API_V1_STR}/openapi.json",
    )

    Base.metadata.create_all(bind=engine)
    application.include_router(api_router, prefix=settings.API_V1_STR)

    return application


app = create_application()


@app.get("/")
def read_root():
    return {"message": "Welcome to FastAPI with Layered Architecture!"}
"#;

const CONFIG: &str = r#"# {{ file_path }}
from pydantic_settings import BaseSettings


class {{ class_name }}(BaseSettings):
    PROJECT_NAME: str = "FastAPI Project"
    API_V1_STR: str = "/api/v1"
    DATABASE_URL: str = "sqlite:///./app.db"

    class Config:
        case_sensitive = True


settings = {{ class_name }}()
"#;

const MODEL: &str = r#"# {{ file_path }}
from datetime import datetime

from sqlalchemy import Column, DateTime, Integer

from app.db.session import Base


class {{ class_name }}(Base):
    __tablename__ = "{{ table_name }}"

    id = Column(Integer, primary_key=True, index=True)
    created_at = Column(DateTime, default=datetime.utcnow)
    updated_at = Column(DateTime, default=datetime.utcnow, onupdate=datetime.utcnow)

    def __repr__(self):
        return f"<{{ class_name }}(id={self.id})>"
"#;

const SCHEMA: &str = r#"# {{ file_path }}
from datetime import datetime

from pydantic import BaseModel


class {{ class_name }}Base(BaseModel):
    pass


class {{ class_name }}Create({{ class_name }}Base):
    pass


class {{ class_name }}Update({{ class_name }}Base):
    pass


class {{ class_name }}({{ class_name }}Base):
    id: int
    created_at: datetime
    updated_at: datetime

    class Config:
        from_attributes = True
"#;

const SERVICE: &str = r#"# {{ file_path }}
from app.repositories.{{ module_name }}_repository import {{ class_name }}Repository
from app.schemas.{{ module_name }} import {{ class_name }}Create, {{ class_name }}Update


class {{ class_name }}Service:
    def __init__(self, repository: {{ class_name }}Repository):
        self.repository = repository

    def get_{{ module_name }}(self, {{ module_name }}_id: int):
        return self.repository.get_by_id({{ module_name }}_id)

    def get_all_{{ table_name }}(self, skip: int = 0, limit: int = 100):
        return self.repository.get_all(skip=skip, limit=limit)

    def create_{{ module_name }}(self, data: {{ class_name }}Create):
        return self.repository.create(data)

    def update_{{ module_name }}(self, {{ module_name }}_id: int, data: {{ class_name }}Update):
        return self.repository.update({{ module_name }}_id, data)

    def delete_{{ module_name }}(self, {{ module_name }}_id: int):
        return self.repository.delete({{ module_name }}_id)
"#;

const REPOSITORY: &str = r#"# {{ file_path }}
from typing import List, Optional

from sqlalchemy.orm import Session

from app.models.{{ module_name }} import {{ class_name }}
from app.schemas.{{ module_name }} import {{ class_name }}Create, {{ class_name }}Update


class {{ class_name }}Repository:
    def __init__(self, db: Session):
        self.db = db

    def get_by_id(self, {{ module_name }}_id: int) -> Optional[{{ class_name }}]:
        return self.db.query({{ class_name }}).filter({{ class_name }}.id == {{ module_name }}_id).first()

    def get_all(self, skip: int = 0, limit: int = 100) -> List[{{ class_name }}]:
        return self.db.query({{ class_name }}).offset(skip).limit(limit).all()

    def create(self, data: {{ class_name }}Create) -> {{ class_name }}:
        db_{{ module_name }} = {{ class_name }}(**data.model_dump())
        self.db.add(db_{{ module_name }})
        self.db.commit()
        self.db.refresh(db_{{ module_name }})
        return db_{{ module_name }}

    def update(self, {{ module_name }}_id: int, data: {{ class_name }}Update) -> Optional[{{ class_name }}]:
        db_{{ module_name }} = self.get_by_id({{ module_name }}_id)
        if db_{{ module_name }}:
            for field, value in data.model_dump(exclude_unset=True).items():
                setattr(db_{{ module_name }}, field, value)
            self.db.commit()
            self.db.refresh(db_{{ module_name }})
        return db_{{ module_name }}

    def delete(self, {{ module_name }}_id: int) -> bool:
        db_{{ module_name }} = self.get_by_id({{ module_name }}_id)
        if not db_{{ module_name }}:
            return False
        self.db.delete(db_{{ module_name }})
        self.db.commit()
        return True
"#;

const ROUTER: &str = r#"# {{ file_path }}
from typing import List

from fastapi import APIRouter, Depends, HTTPException
from sqlalchemy.orm import Session

from app.db.session import get_db
from app.repositories.{{ module_name }}_repository import {{ class_name }}Repository
from app.schemas.{{ module_name }} import {{ class_name }}, {{ class_name }}Create, {{ class_name }}Update
from app.services.{{ module_name }}_service import {{ class_name }}Service

router = APIRouter()


def get_service(db: Session = Depends(get_db)) -> {{ class_name }}Service:
    return {{ class_name }}Service({{ class_name }}Repository(db))


@router.post("/", response_model={{ class_name }})
def create_{{ module_name }}(data: {{ class_name }}Create, service: {{ class_name }}Service = Depends(get_service)):
    return service.create_{{ module_name }}(data)


@router.get("/{{{ module_name }}_id}", response_model={{ class_name }})
def read_{{ module_name }}({{ module_name }}_id: int, service: {{ class_name }}Service = Depends(get_service)):
    db_{{ module_name }} = service.get_{{ module_name }}({{ module_name }}_id)
    if db_{{ module_name }} is None:
        raise HTTPException(status_code=404, detail="{{ class_name }} not found")
    return db_{{ module_name }}


@router.get("/", response_model=List[{{ class_name }}])
def read_{{ table_name }}(skip: int = 0, limit: int = 100, service: {{ class_name }}Service = Depends(get_service)):
    return service.get_all_{{ table_name }}(skip=skip, limit=limit)


@router.put("/{{{ module_name }}_id}", response_model={{ class_name }})
def update_{{ module_name }}(
    {{ module_name }}_id: int,
    data: {{ class_name }}Update,
    service: {{ class_name }}Service = Depends(get_service),
):
    return service.update_{{ module_name }}({{ module_name }}_id, data)


@router.delete("/{{{ module_name }}_id}")
def delete_{{ module_name }}({{ module_name }}_id: int, service: {{ class_name }}Service = Depends(get_service)):
    if not service.delete_{{ module_name }}({{ module_name }}_id):
        raise HTTPException(status_code=404, detail="{{ class_name }} not found")
    return {"message": "{{ class_name }} deleted successfully"}
"#;

const DATABASE: &str = r#"# {{ file_path }}
from sqlalchemy import create_engine
from sqlalchemy.orm import declarative_base, sessionmaker

from app.core.config import settings

engine = create_engine(
    settings.DATABASE_URL,
    connect_args={"check_same_thread": False} if "sqlite" in settings.DATABASE_URL else {},
)
SessionLocal = sessionmaker(autocommit=False, autoflush=False, bind=engine)
Base = declarative_base()


def get_db():
    db = SessionLocal()
    try:
        yield db
    finally:
        db.close()
"#;

const API_ROUTER: &str = r#"# {{ file_path }}
from fastapi import APIRouter

from app.api.v1.endpoints import {{ module_name }}

api_router = APIRouter()
api_router.include_router({{ module_name }}.router, prefix="/{{ table_name }}", tags=["{{ table_name }}"])
"#;

const PACKAGE: &str = "# {{ file_path }}\n";
